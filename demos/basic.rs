use segalloc::{Allocation, RegionAllocator, SEGMENT_HEADER_SIZE};

fn log_alloc(allocation: &Allocation) {
    println!(
        "payload of {} bytes at offset {} ({} hops)",
        allocation.handle.len(),
        allocation.handle.offset(),
        allocation.hops
    );
}

fn main() {
    let mut allocator = RegionAllocator::new(4096).expect("region reservation failed");

    println!("region size: {} bytes", allocator.region_size());
    println!("segment header: {} bytes", SEGMENT_HEADER_SIZE);

    let first = allocator.alloc(100).expect("first allocation failed");
    log_alloc(&first);

    let second = allocator.alloc(200).expect("second allocation failed");
    log_alloc(&second);

    allocator
        .payload_mut(first.handle)
        .expect("handle is live")
        .fill(0xAB);
    let byte = allocator.payload(first.handle).expect("handle is live")[0];
    println!("first payload now reads {byte:#04x}");

    allocator.free(first.handle);
    allocator.free(second.handle);

    println!(
        "after release: {} free bytes in {} segment(s)",
        allocator.free_bytes(),
        allocator.free_list_len()
    );
}
