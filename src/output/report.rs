use std::io::{self, Write};

use crate::hash::DigestSet;

const SEPARATOR: &str = "--------------------------------------";

/// Write the human-readable checksum block: a `Done.` line, a separator,
/// and one `<ALG>: <HEX>` line per digest in report order, followed by a
/// blank line.
pub fn write_report<W: Write>(writer: &mut W, digests: &DigestSet) -> io::Result<()> {
    writeln!(writer, "Done.")?;
    writeln!(writer, "{SEPARATOR}")?;
    for (algorithm, digest) in digests.iter() {
        writeln!(writer, "{}: {digest}", algorithm.name())?;
    }
    writeln!(writer)
}
