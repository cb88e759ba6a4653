use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod error;

pub use error::Error;

/// Number of tokens after the program name below which only usage is shown.
pub const MIN_TOKENS: usize = 3;
pub const COMPILER_MARKER: &str = "-cc";

// Index of the flags marker in the token list (the program name excluded).
const FLAGS_MARKER_POSITION: usize = 1;

peg::parser! {
    grammar tokens<'a>() for [&'a str] {
        rule token() -> &'a str
            = t:[_] { t };

        rule flags_marker() = ["-f"];
        rule sources_marker() = ["-s"];
        rule compiler_marker() = ["-cc"];

        rule compiler() -> Option<&'a str>
            = compiler_marker() cc:token()? { cc };

        pub rule invocation() -> (Invocation<'a>, Option<Option<&'a str>>)
            = executable:token() flags_marker()
              compiler_flags:(!sources_marker() t:token() { t })*
              sources_marker()
              source_files:(!compiler_marker() t:token() { t })*
              cc:compiler()?
              token()*
            {
                let invocation = Invocation {
                    executable,
                    compiler: cc.flatten(),
                    compiler_flags,
                    source_files,
                };
                (invocation, cc)
            };
    }
}

/// A parsed command line: `{executable} -f {flags} -s {sources} [-cc {compiler}]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub executable: &'a str,
    pub compiler: Option<&'a str>,
    pub compiler_flags: Vec<&'a str>,
    pub source_files: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Parses the tokens following the program name.
    ///
    /// Markers match whole tokens only and the first occurrence of each wins;
    /// later copies are ordinary flags or sources. A `-cc` is only recognised
    /// after `-s`, and a trailing `-cc` with no name leaves the compiler unset.
    pub fn parse(args: &[&'a str]) -> Result<Self, Error> {
        let (invocation, cc) = tokens::invocation(args).map_err(|e| {
            if e.location <= FLAGS_MARKER_POSITION {
                Error::MissingFlagsMarker
            } else {
                Error::MissingSourcesMarker
            }
        })?;

        if invocation.executable.is_empty() {
            return Err(Error::EmptyExecutableName);
        }
        if cc == Some(None) {
            log::warn!("`{COMPILER_MARKER}` given without a compiler name, using the default");
        }

        log::debug!("parsed {invocation:?}");
        Ok(invocation)
    }

    pub fn compiler_or<'b>(&'b self, default: &'b str) -> &'b str {
        self.compiler.unwrap_or(default)
    }

    pub fn write_makefile(&self, w: &mut impl Write, default_compiler: &str) -> io::Result<()> {
        writeln!(w, "# Automatically generated makefile")?;
        writeln!(w, "# Generated using makeGen by Juan Jovel")?;
        writeln!(w)?;

        writeln!(w, "CC={}", self.compiler_or(default_compiler))?;
        write!(w, "CFLAGS=")?;
        for flag in self.compiler_flags.iter() {
            write!(w, "{flag} ")?;
        }
        writeln!(w)?;

        write!(w, "TARGETS=")?;
        for src in self.source_files.iter() {
            write!(w, "{src} ")?;
        }
        writeln!(w)?;
        writeln!(w)?;

        let exe = self.executable;
        writeln!(w, "all:")?;
        writeln!(w, "\t$(CC) $(CFLAGS) -o {exe} $(TARGETS)")?;
        writeln!(w)?;

        writeln!(w, "clean:")?;
        writeln!(w, "\trm -f {exe}")?;
        writeln!(w)?;

        writeln!(w, "# End automatically generated makeFile")
    }
}

pub fn makefile_exists(path: &Path) -> bool {
    path.exists()
}

/// Writes the Makefile for `invocation` to `path`, refusing to replace an
/// existing file. The file is flushed and closed before this returns.
pub fn generate(invocation: &Invocation<'_>, path: &Path, default_compiler: &str) -> Result<(), Error> {
    if makefile_exists(path) {
        return Err(Error::AlreadyExists { path: path.to_path_buf() });
    }

    let file = OpenOptions::new().write(true).create_new(true).open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            Error::AlreadyExists { path: path.to_path_buf() }
        } else {
            Error::Create { path: path.to_path_buf(), source }
        }
    })?;

    write_to(file, invocation, default_compiler)
        .map_err(|source| Error::Write { path: path.to_path_buf(), source })?;

    log::info!("wrote {}", path.display());
    Ok(())
}

fn write_to(file: File, invocation: &Invocation<'_>, default_compiler: &str) -> io::Result<()> {
    let mut w = BufWriter::new(file);
    invocation.write_makefile(&mut w, default_compiler)?;
    w.flush()?;
    w.into_inner().map_err(|e| e.into_error())?.sync_all()
}
