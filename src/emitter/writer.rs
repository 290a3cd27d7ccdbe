//! Make rule rendering.

use std::io::{self, Write};

const BANNER: &str = "###########################################\n\
                      # Makefile (LaTeX) generated dependencies #\n\
                      ###########################################\n";

/// Renders rule text in the layout make expects.
pub struct RuleWriter<W: Write> {
    out: W,
}

impl<W: Write> RuleWriter<W> {
    /// Write rules to `out`.
    pub const fn new(out: W) -> Self {
        Self {
            out,
        }
    }

    /// Banner followed by a blank line.
    pub fn write_header(&mut self) -> io::Result<()> {
        write!(self.out, "{BANNER}\n")
    }

    /// `# Generated for <source>` stanza binding `target` to `source` and `deps`.
    pub fn write_rule<'a>(
        &mut self,
        source: &str,
        target: &str,
        deps: impl IntoIterator<Item = &'a str>,
    ) -> io::Result<()> {
        writeln!(self.out, "# Generated for {source}")?;
        write!(self.out, "{target}: {source}")?;
        self.write_deps(deps)
    }

    /// Rule regenerating the rule file itself.
    pub fn write_aggregate<'a>(
        &mut self,
        target: &str,
        config_file: &str,
        deps: impl IntoIterator<Item = &'a str>,
    ) -> io::Result<()> {
        writeln!(self.out, "# Dependencies of this file")?;
        write!(self.out, "{target}: {config_file}")?;
        self.write_deps(deps)
    }

    /// End-of-file marker.
    pub fn write_footer(&mut self) -> io::Result<()> {
        writeln!(self.out, "# EOF")
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// One continuation line per dependency, then a blank line.
    fn write_deps<'a>(&mut self, deps: impl IntoIterator<Item = &'a str>) -> io::Result<()> {
        for dep in deps {
            write!(self.out, " \\\n\t{dep}")?;
        }
        write!(self.out, "\n\n")
    }
}
