/// Default ceiling on the size of a file handed to [`read`](crate::read):
/// 512 MiB.
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 512 * 1024 * 1024;

/// Configuration for the stream reader.
///
/// # Examples
///
/// ```rust
/// use utf8codec::ReaderOptions;
///
/// let options = ReaderOptions {
///     max_input_size: 64 * 1024,
/// };
/// assert!(options.max_input_size < ReaderOptions::default().max_input_size);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Largest source, in bytes, that will be loaded.
    ///
    /// The whole source is read into memory in one go; this bounds that
    /// allocation. It is not a limit of the UTF-8 format.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_INPUT_SIZE`]
    pub max_input_size: u64,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

/// How the writer gets bytes to the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Validate and encode every unit in memory, then write once.
    ///
    /// If any unit is invalid the destination is not touched.
    #[default]
    Buffered,
    /// Write each unit as soon as it validates.
    ///
    /// When a unit fails validation, the bytes of the units before it may
    /// already be in the destination, and no line feed is written.
    Streaming,
}

/// Configuration for the stream writer.
///
/// # Default
///
/// [`WriteMode::Buffered`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterOptions {
    /// See [`WriteMode`].
    pub mode: WriteMode,
}
