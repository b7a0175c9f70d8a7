//! Build a banded matrix, save it, load it back, and combine it

use smtx::{file_io, ops, FileError, SparseMatrix};
use std::time::Instant;

fn main() -> Result<(), FileError> {
    let path = std::env::temp_dir().join("smtx_roundtrip_demo.smtx");

    // Generate test data
    let nrows = 2_000;
    let ncols = 2_000;
    println!("Building a {nrows} x {ncols} band matrix...");

    let build_start = Instant::now();
    let mut matrix = SparseMatrix::new(nrows, ncols);
    for i in 0..nrows {
        matrix.set_element(i, i, 2)?;
        if i + 1 < ncols {
            matrix.set_element(i, i + 1, -1)?;
        }
        if i >= 1 {
            matrix.set_element(i, i - 1, -1)?;
        }
    }
    println!(
        "Built {} entries in {:.3}ms",
        matrix.nnz(),
        build_start.elapsed().as_secs_f64() * 1000.0
    );

    // Write and read the document back
    println!("Writing to '{}'...", path.display());
    let write_start = Instant::now();
    file_io::save_matrix(&path, &matrix)?;
    println!(
        "Write completed in {:.3}ms",
        write_start.elapsed().as_secs_f64() * 1000.0
    );

    let read_start = Instant::now();
    let loaded = file_io::load_matrix(&path)?;
    println!(
        "Read completed in {:.3}ms",
        read_start.elapsed().as_secs_f64() * 1000.0
    );

    assert_eq!(loaded, matrix);
    println!("Round trip verified: {} entries intact", loaded.nnz());

    // Combine the loaded copy with itself
    let op_start = Instant::now();
    let doubled = ops::add(&loaded, &loaded)?;
    println!(
        "Addition completed in {:.3}ms",
        op_start.elapsed().as_secs_f64() * 1000.0
    );
    println!("Doubled diagonal sample: {}", doubled.get_element(10, 10));

    // Clean up
    std::fs::remove_file(&path)?;
    println!("Cleaned up demo file");

    Ok(())
}
