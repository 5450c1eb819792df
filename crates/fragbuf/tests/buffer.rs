#![expect(missing_docs)]

use core::fmt::Write;

use fragbuf::{Bytes, FragmentBuffer};
use insta::assert_snapshot;

/// Renders the fragment layout one line per fragment, as `len: bytes`.
fn layout(buf: &mut FragmentBuffer) -> String {
    let (count, fragments) = buf.result();
    let mut out = format!("total {count}");
    for fragment in fragments {
        write!(out, "\n{}:", fragment.len()).unwrap();
        for byte in fragment {
            write!(out, " {byte:02x}").unwrap();
        }
    }
    out
}

#[test]
fn layout_follows_write_order() {
    let mut buf = FragmentBuffer::new();
    buf.write_byte(0x01);
    buf.write_byte(0x02);
    buf.write_bytes(vec![0x10, 0x11, 0x12]);
    buf.write_range(&[0x20, 0x21, 0x22, 0x23], 1, 2).unwrap();
    buf.write_byte(0x03);
    buf.write_slice(&[0x30]);

    assert_snapshot!(layout(&mut buf), @r"
    total 9
    2: 01 02
    3: 10 11 12
    2: 21 22
    1: 03
    1: 30
    ");

    let merged = buf.to_byte_array();
    assert_eq!(merged.len(), 9);
    assert_snapshot!(layout(&mut buf), @r"
    total 9
    9: 01 02 10 11 12 21 22 03 30
    ");
}

#[test]
fn rejected_range_leaves_layout_alone() {
    let mut buf = FragmentBuffer::new();
    buf.write_bytes(Bytes::from_static(b"ab"));
    buf.write_byte(b'c');

    assert!(buf.write_range(b"xyz", 5, usize::MAX).is_err());
    assert_eq!(buf.len(), 3);
    assert_snapshot!(layout(&mut buf), @r"
    total 3
    2: 61 62
    1: 63
    ");
}

#[test]
fn reused_after_reset() {
    let mut buf = FragmentBuffer::new();
    buf.write_bytes(b"first".to_vec());
    assert_eq!(buf.to_string_lossy(), "first");

    buf.reset();
    assert_snapshot!(layout(&mut buf), @"total 0");

    buf.extend(*b"second");
    assert_eq!(buf.to_string_lossy(), "second");
}

#[test]
fn handed_off_to_another_thread() {
    let mut buf = FragmentBuffer::new();
    buf.write_bytes(b"produced ".to_vec());
    buf.extend(*b"here");

    let text = std::thread::spawn(move || buf.to_string_lossy())
        .join()
        .unwrap();
    assert_eq!(text, "produced here");
}
