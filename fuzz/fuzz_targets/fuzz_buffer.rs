#![no_main]

use arbitrary::Arbitrary;
use fragbuf::{BufferError, BufferOptions, FragmentBuffer};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Byte(u8),
    Bytes(Vec<u8>),
    Slice(Vec<u8>),
    Range { data: Vec<u8>, offset: usize, length: usize },
    RangeOwned { data: Vec<u8>, offset: usize, length: usize },
    Size,
    ToByteArray,
    Result,
    WriteTo,
    Reset,
}

#[derive(Arbitrary, Debug)]
struct Input {
    scratch_capacity: u8,
    ops: Vec<Op>,
}

/// Replays `ops` against a `FragmentBuffer` and a `Vec<u8>` model, panicking
/// on the first divergence.
fn run(input: Input) {
    let mut buf = FragmentBuffer::with_options(BufferOptions {
        scratch_capacity: input.scratch_capacity.into(),
        ..Default::default()
    });
    let mut model: Vec<u8> = Vec::new();

    for op in input.ops {
        match op {
            Op::Byte(byte) => {
                buf.write_byte(byte);
                model.push(byte);
            }
            Op::Bytes(data) => {
                model.extend_from_slice(&data);
                buf.write_bytes(data);
            }
            Op::Slice(data) => {
                buf.write_slice(&data);
                model.extend_from_slice(&data);
            }
            Op::Range { data, offset, length } => {
                let before = buf.len();
                match (
                    buf.write_range(&data, offset, length),
                    data.get(offset..offset.saturating_add(length)),
                ) {
                    (Ok(()), Some(range)) => model.extend_from_slice(range),
                    (Err(BufferError::OutOfBounds { .. }), None) => assert_eq!(buf.len(), before),
                    (got, want) => panic!("range {offset}+{length}: got {got:?}, want {want:?}"),
                }
            }
            Op::RangeOwned { data, offset, length } => {
                let before = buf.len();
                let want = data.get(offset..offset.saturating_add(length)).map(<[u8]>::to_vec);
                match (buf.write_range_owned(data, offset, length), want) {
                    (Ok(()), Some(range)) => model.extend_from_slice(&range),
                    (Err(BufferError::OutOfBounds { .. }), None) => assert_eq!(buf.len(), before),
                    (got, want) => panic!("owned range {offset}+{length}: got {got:?}, want {want:?}"),
                }
            }
            Op::Size => {
                assert_eq!(buf.size(), model.len());
                assert_eq!(buf.pending_len(), 0);
            }
            Op::ToByteArray => assert_eq!(&buf.to_byte_array()[..], &model[..]),
            Op::Result => {
                let (count, fragments) = buf.result();
                assert_eq!(count, model.len());
                assert_eq!(fragments.iter().map(|f| f.len()).sum::<usize>(), count);
                assert!(fragments.iter().all(|f| !f.is_empty()));
            }
            Op::WriteTo => {
                let mut out = Vec::new();
                buf.write_to(&mut out).expect("Vec<u8> sink never fails");
                assert_eq!(out, model);
            }
            Op::Reset => {
                buf.reset();
                model.clear();
            }
        }
        assert_eq!(buf.len(), model.len());
    }

    assert_eq!(&buf.into_bytes()[..], &model[..]);
}

fuzz_target!(|input: Input| run(input));
