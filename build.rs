// Build script: bake the rustc toolchain description into the binary.
//
// The report's version line is a compile-time constant, so the toolchain
// values are captured here rather than probed at run time.

use std::error::Error;

use vergen::{Emitter, RustcBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    let rustc = RustcBuilder::all_rustc()?;
    Emitter::default().add_instructions(&rustc)?.emit()?;
    Ok(())
}
