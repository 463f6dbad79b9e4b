use cyclic_deque::CyclicDeque;

#[derive(Debug, Clone, Copy)]
struct BufferItem {
    id: i32,
}

fn print<'a>(name: &str, items: impl IntoIterator<Item = &'a BufferItem>) {
    println!("{} contents:", name);
    for item in items {
        println!("{}", item.id);
    }
    println!();
}

fn main() {
    let mut buffer = [BufferItem { id: -1 }; 4];

    let mut ring = CyclicDeque::<BufferItem, &mut [BufferItem; 4]>::from(&mut buffer);
    ring.push_back(BufferItem { id: 41 });
    ring.push_front(BufferItem { id: 42 });
    print("ring", &ring);

    let (slots, front, len) = ring.into_raw_parts();
    println!("front slot {}, {} occupied", front, len);
    println!();
    print("buffer", slots.iter());
}
