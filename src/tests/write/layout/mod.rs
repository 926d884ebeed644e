// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::tests::{init_logger, read_u16, read_u32};
use crate::write::ZipFileBuilder;

const ENTRIES: &[(&str, &[u8])] = &[
    ("page_1.png", &[0x89, 0x50, 0x4E, 0x47]),
    ("empty", &[]),
    ("text/lorem.txt", b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt..."),
    ("\u{4E2D}\u{6587}.txt", "\u{4E2D}\u{6587}".as_bytes()),
    ("page_1.png", &[0x00]),
];

fn build() -> Vec<u8> {
    let mut builder = ZipFileBuilder::new();
    for (name, data) in ENTRIES {
        builder.add_entry(*name, *data).expect("failed to add entry");
    }
    builder.finalize().into_inner()
}

/// Walks the central directory from the end record and checks every record against its local header.
#[test]
fn central_directory_points_at_local_headers() {
    init_logger();

    let archive = build();
    let eocdr = archive.len() - 22;

    assert_eq!(read_u32(&archive, eocdr), 0x06054B50);
    assert_eq!(read_u16(&archive, eocdr + 4), 0);
    assert_eq!(read_u16(&archive, eocdr + 6), 0);
    assert_eq!(read_u16(&archive, eocdr + 8) as usize, ENTRIES.len());
    assert_eq!(read_u16(&archive, eocdr + 10) as usize, ENTRIES.len());

    let cd_size = read_u32(&archive, eocdr + 12) as usize;
    let cd_offset = read_u32(&archive, eocdr + 16) as usize;
    assert_eq!(cd_offset + cd_size, eocdr);
    assert_eq!(read_u16(&archive, eocdr + 20), 0);

    let mut cursor = cd_offset;
    let mut expected_lh_offset = 0;

    for (name, data) in ENTRIES {
        assert_eq!(read_u32(&archive, cursor), 0x02014B50);
        assert_eq!(read_u16(&archive, cursor + 4), 20);
        assert_eq!(read_u16(&archive, cursor + 6), 20);

        let crc = read_u32(&archive, cursor + 16);
        let compressed_size = read_u32(&archive, cursor + 20) as usize;
        let uncompressed_size = read_u32(&archive, cursor + 24) as usize;
        let name_length = read_u16(&archive, cursor + 28) as usize;
        let lh_offset = read_u32(&archive, cursor + 42) as usize;

        assert_eq!(crc, crc32fast::hash(data));
        assert_eq!(compressed_size, data.len());
        assert_eq!(uncompressed_size, data.len());
        assert_eq!(&archive[cursor + 46..cursor + 46 + name_length], name.as_bytes());
        assert_eq!(lh_offset, expected_lh_offset);

        // The local header must agree with its central directory record.
        assert_eq!(read_u32(&archive, lh_offset), 0x04034B50);
        assert_eq!(read_u32(&archive, lh_offset + 14), crc);
        assert_eq!(read_u32(&archive, lh_offset + 18) as usize, compressed_size);
        assert_eq!(read_u32(&archive, lh_offset + 22) as usize, uncompressed_size);
        assert_eq!(read_u16(&archive, lh_offset + 26) as usize, name_length);
        assert_eq!(read_u16(&archive, lh_offset + 28), 0);

        let data_offset = lh_offset + 30 + name_length;
        assert_eq!(&archive[data_offset..data_offset + data.len()], *data);

        expected_lh_offset = data_offset + data.len();
        cursor += 46 + name_length;
    }

    assert_eq!(expected_lh_offset, cd_offset);
    assert_eq!(cursor, eocdr);
}

#[test]
fn fixed_fields_are_zeroed() {
    let archive = build();

    // Flags, compression method, time, and date of the first local header.
    assert_eq!(&archive[6..14], &[0; 8]);

    // Extra field, comment, disk start, internal and external attributes of the first central record.
    let cd_offset = read_u32(&archive, archive.len() - 6) as usize;
    assert_eq!(&archive[cd_offset + 8..cd_offset + 16], &[0; 8]);
    assert_eq!(&archive[cd_offset + 30..cd_offset + 42], &[0; 12]);
}
