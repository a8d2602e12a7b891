use crate::FileError;
use bit_array::{BitArray, bytes_for_bits};
use bytemuck_derive::Pod;
use bytemuck_derive::Zeroable;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;

pub const MAGIC: &[u8; 18] = b"BitArray_Data_File";
pub const HEADER_LEN: usize = core::mem::size_of::<FileHeader>();

type Result<T> = core::result::Result<T, FileError>;

// Bit lengths are stored as u64, so every usize length converts losslessly.
const _: () = assert!(usize::BITS <= u64::BITS);

/// Fixed prefix of every saved bit array.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct FileHeader {
    pub magic: [u8; 18],
    /// Bit length, little-endian.
    pub num_bits: [u8; 8],
}

impl FileHeader {
    pub fn new(num_bits: usize) -> Self {
        FileHeader {
            magic: *MAGIC,
            num_bits: (num_bits as u64).to_le_bytes(),
        }
    }

    pub fn num_bits(&self) -> u64 {
        u64::from_le_bytes(self.num_bits)
    }
}

/// Write a bit array to a writer.
pub fn save<W: Write>(writer: &mut W, array: &BitArray) -> Result<()> {
    write_stream(writer, array).inspect_err(|e| {
        log::error!("Error writing BitArray of {} bits: {}", array.len(), e);
    })
}

/// Read a bit array from a reader.
///
/// # Errors
///
/// - [`FileError::InvalidMagic`] if the input does not start with [`MAGIC`]
/// - [`FileError::Truncated`] if the length word or payload is cut short
/// - [`FileError::LengthOverflow`] if the length word does not fit `usize`
///
/// The payload buffer grows only as bytes arrive, so a length word that
/// promises more than the reader holds costs no more than the bytes read.
pub fn load<R: Read>(reader: &mut R) -> Result<BitArray> {
    read_header(reader)
        .and_then(|num_bits| read_payload(reader, num_bits))
        .inspect_err(|e| log::error!("Unable to read BitArray: {}", e))
}

/// Save a bit array to `path`, truncating any existing file.
///
/// The data is synced to disk before returning so that write-back errors are
/// reported. A failed save may leave a partial file behind.
///
/// # Examples
///
/// ```no_run
/// use bit_array::BitArray;
/// use bit_file::{load_from_file, save_to_file};
///
/// let bits = BitArray::from_hex("ADF3527FA0009382777D7A73625").unwrap();
/// save_to_file("bits.bin", &bits).unwrap();
///
/// let loaded = load_from_file("bits.bin").unwrap();
/// assert_eq!(loaded.to_hex(), "ADF3527FA0009382777D7A73625");
/// # std::fs::remove_file("bits.bin").unwrap();
/// ```
pub fn save_to_file<P: AsRef<Path>>(path: P, array: &BitArray) -> Result<()> {
    let path = path.as_ref();
    match write_file(path, array) {
        Ok(()) => {
            log::debug!("saved {} bits to '{}'", array.len(), path.display());
            Ok(())
        }
        Err(e) => {
            log::error!("Error saving BitArray '{}': {}", path.display(), e);
            Err(e)
        }
    }
}

/// Load a bit array previously written by [`save_to_file`].
///
/// The payload size promised by the header is checked against the file size
/// before any memory is allocated for it.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<BitArray> {
    let path = path.as_ref();
    match read_file(path) {
        Ok(array) => {
            log::debug!("loaded {} bits from '{}'", array.len(), path.display());
            Ok(array)
        }
        Err(e) => {
            log::error!("Unable to load BitArray from '{}': {}", path.display(), e);
            Err(e)
        }
    }
}

fn write_file(path: &Path, array: &BitArray) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_stream(&mut writer, array)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

fn read_file(path: &Path) -> Result<BitArray> {
    let mut file = File::open(path)?;
    let file_len = file.metadata()?.len();

    let num_bits = read_header(&mut file)?;
    let expected = bytes_for_bits(num_bits) as u64;
    let available = file_len.saturating_sub(HEADER_LEN as u64);
    if available < expected {
        return Err(FileError::Truncated {
            expected,
            found: available,
        });
    }
    read_payload(&mut file, num_bits)
}

fn write_stream<W: Write>(writer: &mut W, array: &BitArray) -> Result<()> {
    let header = FileHeader::new(array.len());
    writer.write_all(bytemuck::bytes_of(&header))?;
    writer.write_all(array.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn read_header<R: Read>(reader: &mut R) -> Result<usize> {
    let mut header: FileHeader = bytemuck::Zeroable::zeroed();

    let found = read_up_to(reader, &mut header.magic)?;
    if found < MAGIC.len() || &header.magic != MAGIC {
        return Err(FileError::InvalidMagic);
    }

    let found = read_up_to(reader, &mut header.num_bits)?;
    if found < header.num_bits.len() {
        return Err(FileError::Truncated {
            expected: header.num_bits.len() as u64,
            found: found as u64,
        });
    }

    let num_bits = header.num_bits();
    usize::try_from(num_bits).map_err(|_| FileError::LengthOverflow(num_bits))
}

fn read_payload<R: Read>(reader: &mut R, num_bits: usize) -> Result<BitArray> {
    let expected = bytes_for_bits(num_bits);
    let mut bytes = Vec::new();
    reader.by_ref().take(expected as u64).read_to_end(&mut bytes)?;
    if bytes.len() < expected {
        return Err(FileError::Truncated {
            expected: expected as u64,
            found: bytes.len() as u64,
        });
    }
    Ok(BitArray::from_raw_parts(num_bits, bytes)?)
}

/// Fills `buf` as far as the reader allows; returns the byte count.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
