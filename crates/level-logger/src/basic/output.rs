use std::io::{self, Write};

/// Destination of a [`BasicLogger`](crate::BasicLogger).
#[derive(Debug)]
pub enum Output<W> {
    /// The process's standard output stream.
    Stdout(io::Stdout),
    /// A caller-supplied writer.
    Writer(W),
}

impl<W> Output<W> {
    /// Uses `writer` when present, standard output otherwise.
    #[must_use]
    pub fn from_option(writer: Option<W>) -> Self {
        writer.map_or_else(|| Self::Stdout(io::stdout()), Self::Writer)
    }

    /// Reports whether lines go to standard output.
    #[must_use]
    pub const fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout(_))
    }

    /// Borrows the caller-supplied writer.
    #[must_use]
    pub const fn get_ref(&self) -> Option<&W> {
        match self {
            Self::Stdout(_) => None,
            Self::Writer(writer) => Some(writer),
        }
    }

    /// Returns the caller-supplied writer.
    #[must_use]
    pub fn into_inner(self) -> Option<W> {
        match self {
            Self::Stdout(_) => None,
            Self::Writer(writer) => Some(writer),
        }
    }
}

impl<W> Write for Output<W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(stdout) => stdout.write(buf),
            Self::Writer(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(stdout) => stdout.flush(),
            Self::Writer(writer) => writer.flush(),
        }
    }
}
