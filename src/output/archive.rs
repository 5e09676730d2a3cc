//! Archive bundling for the generated output files

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use tar::{Builder, EntryType, Header};

use super::{JSON_FILE, TREE_TEXT_FILE, YAML_FILE};

/// Bundle the three generated output files into one gzipped tarball.
///
/// Entries are stored under their bare file names with fixed metadata
/// (mode 0644, root ownership, zero mtime).
pub fn bundle(archive_path: &Path, output_dir: &Path) -> io::Result<()> {
    let file = File::create(archive_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = Builder::new(encoder);

    for name in [TREE_TEXT_FILE, JSON_FILE, YAML_FILE] {
        let data = fs::read(output_dir.join(name))?;
        append_file_entry(&mut builder, name, &data)?;
    }

    let encoder = builder.into_inner()?;
    encoder.finish()?;
    Ok(())
}

fn append_file_entry<W: Write>(
    builder: &mut Builder<W>,
    destination: &str,
    data: &[u8],
) -> io::Result<()> {
    let mut header = Header::new_gnu();
    header.set_entry_type(EntryType::Regular);
    header.set_mode(0o644);
    header.set_uid(0);
    header.set_gid(0);
    header.set_mtime(0);
    header.set_size(data.len() as u64);
    header.set_path(destination)?;
    header.set_cksum();
    builder.append(&header, data)?;
    Ok(())
}
