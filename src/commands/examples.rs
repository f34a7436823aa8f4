use crate::corpus;
use colored::*;
use std::io::Write;

pub fn list_examples() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    write_example_list(&mut stdout.lock())
}

pub fn write_example_list<W: Write>(writer: &mut W) -> anyhow::Result<()> {
    writeln!(writer, "{}", "Bundled examples".bold())?;
    for example in corpus::entries() {
        writeln!(
            writer,
            "  {:<10} {}",
            example.key.cyan(),
            example.description
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "Run one with: luadeob run --example <name>")?;
    Ok(())
}
