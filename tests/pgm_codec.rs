use graymap::{load_pgm, read_pgm, save_pgm, write_pgm, GrayMap, GrayMapError};
use std::io::Cursor;

fn decode(bytes: &[u8]) -> Result<GrayMap, GrayMapError> {
    read_pgm(Cursor::new(bytes))
}

#[test]
fn reads_header_with_comments() {
    let mut bytes = b"P5\n# made by hand\n3 # width\n2\n# maxval next\n200\n".to_vec();
    bytes.extend_from_slice(&[1, 2, 3, 4, 5, 250]);
    let img = decode(&bytes).unwrap();
    assert_eq!((img.width(), img.height(), img.maxval()), (3, 2, 200));
    assert_eq!(img.data(), &[1, 2, 3, 4, 5, 250]);
}

#[test]
fn writes_canonical_header() {
    let img = GrayMap::from_vec(vec![9, 8, 7, 6], 2, 2, 15).unwrap();
    let mut out = Vec::new();
    write_pgm(&img, &mut out).unwrap();
    assert_eq!(&out[..10], b"P5\n2 2\n15\n");
    assert_eq!(&out[10..], &[9, 8, 7, 6]);
    assert_eq!(decode(&out).unwrap(), img);
}

#[test]
fn rejects_other_formats() {
    let err = decode(b"P2\n1 1\n255\n0").err().unwrap();
    assert_eq!(
        err,
        GrayMapError::Pgm {
            reason: "invalid file format"
        }
    );
    assert!(decode(b"").is_err());
}

#[test]
fn rejects_bad_header_fields() {
    assert_eq!(
        decode(b"P5\nx 1\n255\n").err().unwrap(),
        GrayMapError::Pgm {
            reason: "invalid width"
        }
    );
    assert_eq!(
        decode(b"P5\n1 -1\n255\n").err().unwrap(),
        GrayMapError::Pgm {
            reason: "invalid height"
        }
    );
    assert_eq!(
        decode(b"P5\n1 1\n256\n\0").err().unwrap(),
        GrayMapError::InvalidMaxval { maxval: 256 }
    );
    assert_eq!(
        decode(b"P5\n1 1\n0\n\0").err().unwrap(),
        GrayMapError::InvalidMaxval { maxval: 0 }
    );
    assert_eq!(
        decode(b"P5\n1 1\n255").err().unwrap(),
        GrayMapError::Pgm {
            reason: "whitespace expected"
        }
    );
}

#[test]
fn rejects_truncated_raster() {
    let err = decode(b"P5\n2 2\n255\n\x01\x02\x03").err().unwrap();
    assert_eq!(
        err,
        GrayMapError::Pgm {
            reason: "truncated raster"
        }
    );
}

#[test]
fn file_round_trip() {
    let path = std::env::temp_dir().join(format!("graymap-pgm-{}.pgm", std::process::id()));
    let img = GrayMap::from_vec((0u8..20).collect(), 5, 4, 19).unwrap();
    save_pgm(&img, &path).unwrap();
    let loaded = load_pgm(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_pgm("/nonexistent/graymap/input.pgm").err().unwrap();
    assert!(matches!(err, GrayMapError::Io { .. }));
}

#[test]
fn oversized_header_with_short_raster_is_truncated() {
    // header claims ~4 GB, stream carries 4 bytes
    let err = decode(b"P5\n65536 65536\n255\n\x01\x02\x03\x04")
        .err()
        .unwrap();
    assert_eq!(
        err,
        GrayMapError::Pgm {
            reason: "truncated raster"
        }
    );
}

#[test]
fn trailing_bytes_after_raster_are_ignored() {
    let img = decode(b"P5\n2 1\n255\n\x07\x08\x09\x0a").unwrap();
    assert_eq!(img.data(), &[7, 8]);
}

#[test]
fn empty_raster_decodes() {
    let img = decode(b"P5\n0 3\n255\n").unwrap();
    assert_eq!((img.width(), img.height()), (0, 3));
    assert!(img.data().is_empty());
}
