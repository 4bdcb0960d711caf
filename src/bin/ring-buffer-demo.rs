use std::env;

use anyhow::Context;
use log::info;
use ring_buffer::RingBuffer;

const DEFAULT_ROUNDS: i32 = 10;

/// Fills a buffer of vectors past capacity, copies it twice and walks the copy with a cursor.
fn copy_and_walk() {
    let mut first = RingBuffer::<Vec<i32>, 3>::new();
    for i in 0..9 {
        first.push(vec![i, i + 1, i + 2]);
    }

    let second = first.clone();
    let mut third = RingBuffer::<Vec<i32>, 3>::new();
    third.clone_from(&second);
    third.pop_front();

    let (mut it, end) = (third.begin(), third.end());
    while it != end {
        if let Some(values) = it.get() {
            info!("{values:?}");
        }
        it.advance();
    }
}

/// Pushes `0..rounds` into an overwriting buffer, reporting the oldest item after each push.
fn push_and_report(rounds: i32) {
    let mut buf = RingBuffer::<i32, 3>::new();
    for i in 0..rounds {
        buf.push(i);
        if let Some(front) = buf.front() {
            info!("pushed {i}, front is {front}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let rounds = match env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid round count {arg:?}"))?,
        None => DEFAULT_ROUNDS,
    };

    copy_and_walk();
    push_and_report(rounds);
    Ok(())
}
