#![cfg(feature = "unstable")]
#![cfg_attr(feature = "unstable", feature(test))]

extern crate std;
extern crate test;

use cyclic_deque::{InlineDeque, SliceDeque};
use rand::{rngs::SmallRng, Rng, RngCore, SeedableRng};
use std::collections::VecDeque;
use test::Bencher;

const N: usize = 1024;

trait Queue {
    fn push_back(&mut self, x: u32);
    fn push_front(&mut self, x: u32);
    fn pop_back(&mut self) -> Option<u32>;
    fn pop_front(&mut self) -> Option<u32>;
}

impl Queue for SliceDeque<'_, u32> {
    fn push_back(&mut self, x: u32) {
        let _ = self.try_push_back(x);
    }
    fn push_front(&mut self, x: u32) {
        let _ = self.try_push_front(x);
    }
    fn pop_back(&mut self) -> Option<u32> {
        SliceDeque::pop_back(self).copied()
    }
    fn pop_front(&mut self) -> Option<u32> {
        SliceDeque::pop_front(self).copied()
    }
}

impl Queue for VecDeque<u32> {
    fn push_back(&mut self, x: u32) {
        if self.len() < N {
            VecDeque::push_back(self, x);
        }
    }
    fn push_front(&mut self, x: u32) {
        if self.len() < N {
            VecDeque::push_front(self, x);
        }
    }
    fn pop_back(&mut self) -> Option<u32> {
        VecDeque::pop_back(self)
    }
    fn pop_front(&mut self) -> Option<u32> {
        VecDeque::pop_front(self)
    }
}

fn random_ops<Q: Queue>(queue: &mut Q, rng: &mut SmallRng) {
    for _ in 0..N {
        match rng.gen_range(0..4) {
            0 => queue.push_back(rng.next_u32()),
            1 => queue.push_front(rng.next_u32()),
            2 => {
                let _ = queue.pop_back();
            }
            _ => {
                let _ = queue.pop_front();
            }
        }
    }
}

#[bench]
fn random_ops_slice_deque(b: &mut Bencher) {
    let mut rng = SmallRng::seed_from_u64(0x5432_1012_3454_3210);
    let mut backing = [0u32; N];
    let mut deque = SliceDeque::<u32>::from(&mut backing[..]);
    b.iter(|| random_ops(&mut deque, &mut rng));
}

#[bench]
fn random_ops_std_vec_deque(b: &mut Bencher) {
    let mut rng = SmallRng::seed_from_u64(0x5432_1012_3454_3210);
    let mut deque = VecDeque::with_capacity(N);
    b.iter(|| random_ops(&mut deque, &mut rng));
}

#[bench]
fn fifo_through_inline_deque(b: &mut Bencher) {
    let mut deque = InlineDeque::<u32, 64>::new();
    b.iter(|| {
        for i in 0..N as u32 {
            if deque.is_full() {
                let _ = deque.pop_front();
            }
            deque.push_back(i);
        }
        test::black_box(deque.front().copied())
    });
}

#[bench]
fn append_range_across_the_seam(b: &mut Bencher) {
    let mut backing = [0u32; N];
    let mut deque = SliceDeque::<u32>::from(&mut backing[..]);
    deque.resize(N - N / 4);
    for _ in 0..N / 2 {
        deque.pop_front();
    }

    b.iter(|| {
        deque.append_range(0..(N / 2) as u32);
        deque.resize(N / 4);
        test::black_box(deque.len())
    });
}

#[bench]
fn prepend_range_across_the_seam(b: &mut Bencher) {
    let mut backing = [0u32; N];
    let mut deque = SliceDeque::<u32>::from(&mut backing[..]);
    deque.append_range(0..(N / 2) as u32);
    for _ in 0..3 * N / 8 {
        deque.pop_front();
    }

    b.iter(|| {
        deque.prepend_range(0..(N / 2) as u32);
        for _ in 0..N / 2 {
            deque.pop_front();
        }
        test::black_box(deque.len())
    });
}
