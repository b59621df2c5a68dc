use clap::Parser;
use dlist::prelude::*;

/// Walks a doubly-linked list through each of its operations and prints the
/// list after every step.
#[derive(Parser, Debug)]
#[command(about = "Fun with doubly-linked lists")]
struct CmdOptions {
    /// "Comma-separated values to seed the list with"
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [5, 3, 8, 6, 2]
    )]
    values: Vec<i32>,
    /// "Threshold used when partitioning the list"
    #[arg(short, long, default_value = "3", allow_negative_numbers = true)]
    threshold: i32,
    /// "Position used for the get/set/insert/remove steps"
    #[arg(short, long, default_value = "1")]
    index: usize,
}

fn render(list: &DoublyLinkedList) -> String {
    let values: Vec<String> = list.iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(" <-> "))
}

fn report(step: &str, list: &DoublyLinkedList) {
    println!("{:<16} {}", step, render(list));
    log::debug!(
        "head = {:?}, tail = {:?}, length = {}",
        list.head().map(Node::value),
        list.tail().map(Node::value),
        list.len()
    );
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    if options.values.is_empty() {
        log::error!("At least one value must be given using the --values option.");
        std::process::exit(1);
    }

    let mut list: DoublyLinkedList = options.values.iter().copied().collect();
    report("initial", &list);
    log::info!("palindrome: {}", list.is_palindrome());

    let index = options.index;
    match list.get(index) {
        Some(node) => log::info!("get({}) = {}", index, node.value()),
        None => log::warn!("get({}) is out of range", index),
    }

    if list.set(index, 0) {
        report("set", &list);
    } else {
        log::warn!("set({}) is out of range", index);
    }

    if list.insert(99, index) {
        report("insert", &list);
    } else {
        log::warn!("insert at {} is out of range", index);
    }

    match list.remove(index) {
        Some(node) => {
            log::info!("removed {}", node.value());
            report("remove", &list);
        }
        None => log::warn!("remove({}) is out of range", index),
    }

    list.reverse();
    report("reverse", &list);

    list.reverse();
    list.partition(options.threshold);
    report("partition", &list);

    list.swap_pairs();
    report("swap pairs", &list);

    while let Some(node) = list.remove_last() {
        log::debug!("drained {}", node.value());
    }
    report("drained", &list);
}
