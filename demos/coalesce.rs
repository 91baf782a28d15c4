//! Fragments the region, then watches release stitch it back together.

use segalloc::RegionAllocator;

fn main() {
    let mut allocator = RegionAllocator::new(4096).expect("region reservation failed");

    let first = allocator.alloc(100).expect("alloc failed").handle;
    let second = allocator.alloc(100).expect("alloc failed").handle;
    let third = allocator.alloc(100).expect("alloc failed").handle;

    println!(
        "three payloads live: {} free segment(s), {} free bytes",
        allocator.free_list_len(),
        allocator.free_bytes()
    );

    allocator.free(first);
    allocator.free(third);
    println!(
        "first and third released: {} free segment(s), {} free bytes",
        allocator.free_list_len(),
        allocator.free_bytes()
    );

    // Releasing the middle payload bridges all three gaps at once.
    allocator.free(second);
    println!(
        "second released: {} free segment(s), {} free bytes",
        allocator.free_list_len(),
        allocator.free_bytes()
    );

    // First fit hands the lowest address out again.
    let reused = allocator.alloc(50).expect("alloc failed");
    println!(
        "new payload at offset {} ({} hops)",
        reused.handle.offset(),
        reused.hops
    );
}
