//! Assembles an HTTP-style response from a header built byte by byte, a
//! pre-rendered body handed over without copying, and a trailer, then ships
//! it to a writer with one vectored write per attempt.
//!
//! Run with
//!
//! ```bash
//! cargo run -p fragbuf --example scatter_write
//! ```
#![allow(missing_docs)]

use std::io::{self, Write};

use fragbuf::FragmentBuffer;

fn main() -> io::Result<()> {
    let body = b"{\"status\":\"ok\"}\n".to_vec();

    let mut response = FragmentBuffer::new();
    write!(response, "HTTP/1.1 200 OK\r\ncontent-length: {}\r\n", body.len())?;
    response.extend(*b"\r\n");
    response.write_bytes(body);

    let (total, fragments) = response.result();
    eprintln!("{total} bytes in {} fragments", fragments.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    response.write_vectored_to(&mut out)?;
    out.flush()
}
