use bit_array::{BitArray, BitArrayError, BitState};

fn main() {
    println!("=== Bit Array Examples ===\n");

    // Example 1: Free-block bitmap
    let _ = example_block_bitmap();

    // Example 2: Text forms
    let _ = example_text_forms();

    // Example 3: Combining masks
    let _ = example_masks();
}

fn example_block_bitmap() -> Result<(), BitArrayError> {
    println!("Example 1: Tracking 64 disk blocks");

    let mut used = BitArray::new(64)?;

    // Superblock and inode table
    used.set_region(0, 9)?;
    // A few scattered files
    used.set_bits(&[17, 18, 40])?;

    println!("  Used blocks: {}", used.count_set());
    println!("  Free blocks: {}", used.count_clear());
    println!("  First free:  {:?}", used.first_clear());
    println!(
        "  Next free after 17: {:?}",
        used.find_next(BitState::Clear, 17)?
    );
    println!("  Last used:   {:?}", used.last_set());

    // Free the file at 17..=18
    used.clear_region(17, 18)?;
    println!("  After freeing 17-18: {} used", used.count_set());
    println!();

    Ok(())
}

fn example_text_forms() -> Result<(), BitArrayError> {
    println!("Example 2: Hex and binary text");

    let bits = BitArray::from_bin("1010111")?;
    println!("  Binary: {}", bits);
    println!("  Hex:    {:X}", bits);

    let parsed = BitArray::from_hex("A7")?;
    println!("  from_hex(\"A7\") has {} bits: {}", parsed.len(), parsed);

    println!("  Printed in columns of 4:");
    let sample = BitArray::from_hex("ADF3527FA0009382777D7A73625")?;
    let mut out = Vec::new();
    sample.print_hex(&mut out, 4)?;
    print!("{}", String::from_utf8_lossy(&out));
    println!();

    Ok(())
}

fn example_masks() -> Result<(), BitArrayError> {
    println!("Example 3: Combining permission masks");

    let readers: BitArray = "11010010".parse()?;
    let writers: BitArray = "10010011".parse()?;

    println!("  read & write: {}", readers.and(&writers)?);
    println!("  read | write: {}", readers.or(&writers)?);
    println!("  read only:    {}", readers.and(&!writers.try_clone()?)?);

    let users: Vec<usize> = readers.ones().collect();
    println!("  Users with read access: {:?}", users);
    println!();

    Ok(())
}
