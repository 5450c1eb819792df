use alloc::vec::Vec;

use quickcheck::{Arbitrary, Gen};

/// One call against a [`FragmentBuffer`](crate::FragmentBuffer), replayed
/// against a plain `Vec<u8>` model by the property tests.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    Byte(u8),
    Bytes(Vec<u8>),
    Slice(Vec<u8>),
    Range {
        data: Vec<u8>,
        offset: usize,
        length: usize,
    },
    RangeOwned {
        data: Vec<u8>,
        offset: usize,
        length: usize,
    },
    Size,
    ToByteArray,
    Result,
    Reset,
}

/// Picks a range that is valid most of the time but regularly strays one or
/// two bytes past the end, with the occasional overflowing length.
fn arbitrary_range(g: &mut Gen, len: usize) -> (usize, usize) {
    let offset = usize::arbitrary(g) % (len + 2);
    let length = match usize::arbitrary(g) % 8 {
        0 => usize::MAX - usize::arbitrary(g) % 4,
        _ => usize::arbitrary(g) % (len + 3),
    };
    (offset, length)
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 12 {
            0..=3 => Op::Byte(u8::arbitrary(g)),
            4 => Op::Bytes(Vec::arbitrary(g)),
            5 => Op::Slice(Vec::arbitrary(g)),
            6 => {
                let data = Vec::<u8>::arbitrary(g);
                let (offset, length) = arbitrary_range(g, data.len());
                Op::Range {
                    data,
                    offset,
                    length,
                }
            }
            7 => {
                let data = Vec::<u8>::arbitrary(g);
                let (offset, length) = arbitrary_range(g, data.len());
                Op::RangeOwned {
                    data,
                    offset,
                    length,
                }
            }
            8 => Op::Size,
            9 => Op::ToByteArray,
            10 => Op::Result,
            _ => {
                // Keep resets rare so streams grow long enough to matter.
                if usize::arbitrary(g) % 4 == 0 {
                    Op::Reset
                } else {
                    Op::Size
                }
            }
        }
    }
}
