use packed_array::{PackedArray, compute_bits_per_item};

fn main() {
    println!("=== Packed Array Examples ===\n");

    // Example 1: Storing palette indices
    let _ = example_palette_indices();

    // Example 2: Picking the width from the data
    let _ = example_width_estimation();

    // Example 3: Memory comparison
    let _ = example_memory_savings();
}

fn example_palette_indices() -> Result<(), packed_array::PackedArrayError> {
    println!("Example 1: Storing palette indices (5 bits each)");

    let mut colors = PackedArray::new(5, 3)?;

    // Store palette indices (0-31)
    colors.set(0, 15); // Red shade
    colors.set(1, 8); // Green shade
    colors.set(2, 23); // Blue shade

    println!("  Stored {} colors", colors.len());
    println!("  Color 0: {}", colors.get(0));
    println!("  Color 1: {}", colors.get(1));
    println!("  Color 2: {}", colors.get(2));
    println!();

    Ok(())
}

fn example_width_estimation() -> Result<(), packed_array::PackedArrayError> {
    println!("Example 2: Deriving the bit width from sample data");

    let samples = [12u32, 999, 43, 0, 512];
    let bits = compute_bits_per_item(&samples);
    println!("  Max value {} needs {} bits", 999, bits);

    let mut array = PackedArray::new(bits, samples.len())?;
    array.pack(0, &samples);

    let mut decoded = vec![0u32; samples.len()];
    array.unpack(0, &mut decoded);
    println!("  Round trip: {:?}", decoded);
    println!();

    Ok(())
}

fn example_memory_savings() -> Result<(), packed_array::PackedArrayError> {
    println!("Example 3: Memory savings comparison");

    let count = 10_000;

    // Standard Vec<u32>
    let standard_bytes = count * 4;

    // PackedArray of 12-bit values (0-4095)
    let values: Vec<u32> = (0..count as u32).map(|i| i % 4096).collect();
    let mut packed = PackedArray::new(12, count)?;
    packed.pack(0, &values);
    let packed_bytes = packed.as_bytes().len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} 12-bit values:", count);
    println!("  Vec<u32>: {} bytes", standard_bytes);
    println!("  Packed:   {} bytes", packed_bytes);
    println!("  Savings:  {:.1}%", savings);

    Ok(())
}
