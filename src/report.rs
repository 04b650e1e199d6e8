//! Text report of a solved White-to-move table
//!
//! ```text
//! 40960
//! 1138 1 c7c1 ka1,Kb3,Qc7
//! ```
//!
//! The first line is the table length. Each following line is one winning
//! entry: index, mate-in-N, best move and the piece list decoded from the
//! index. Moves and pieces are in the canonical frame. Draws and unresolved
//! entries are left out.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::board::{Move, Square};
use crate::error::{ChessError, ChessResult};
use crate::symmetry::decode_index;
use crate::tablebase::{white_mate_in, white_mate_score, EndgameConfig, Tablebase, WHITE_MATE};
use crate::utils::{cell_name, parse_cell, square_to_cell};

/// Piece list of `index`, e.g. "kd1,Kb3,Qc2".
fn piece_list(config: &EndgameConfig, index: usize) -> ChessResult<String> {
    let squares = decode_index(index, config.piece_count())?;
    let mut parts = Vec::with_capacity(squares.len());
    for (piece, &sq) in config.pieces().iter().zip(squares.iter()) {
        let ch = piece.to_char().ok_or(ChessError::InvalidSquareValue)?;
        parts.push(format!("{}{}", ch, cell_name(square_to_cell(sq))?));
    }
    Ok(parts.join(","))
}

/// Write the report and return the number of entries written.
pub fn write<W: Write>(out: &mut W, tablebase: &Tablebase) -> ChessResult<usize> {
    let config = tablebase.config();
    writeln!(out, "{}", tablebase.len())?;
    let mut written = 0;
    for (index, mv) in tablebase.white_entries() {
        let Some(mate_in) = white_mate_in(mv.score) else {
            continue;
        };
        writeln!(
            out,
            "{} {} {} {}",
            index,
            mate_in,
            mv.algebraic()?,
            piece_list(config, index)?
        )?;
        written += 1;
    }
    Ok(written)
}

pub fn save<P: AsRef<Path>>(path: P, tablebase: &Tablebase) -> ChessResult<usize> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    let written = write(&mut out, tablebase)?;
    out.flush()?;
    info!("Wrote {} winning positions to {}", written, path.display());
    Ok(written)
}

fn bad(line: usize, reason: impl Into<String>) -> ChessError {
    ChessError::Report {
        line,
        reason: reason.into(),
    }
}

/// Rebuild the White-to-move table of `config` from a report. The Black
/// table is not part of the report and stays unscored.
pub fn read<R: BufRead>(input: R, config: EndgameConfig) -> ChessResult<Tablebase> {
    let mut tablebase = Tablebase::new(config);
    let mut lines = input.lines();

    let header = lines.next().ok_or_else(|| bad(1, "empty report"))??;
    let len: usize = header
        .trim()
        .parse()
        .map_err(|_| bad(1, format!("invalid table length '{}'", header.trim())))?;
    if len != tablebase.len() {
        return Err(bad(
            1,
            format!(
                "table length {} does not match configuration '{}' ({})",
                len,
                tablebase.config().name(),
                tablebase.len()
            ),
        ));
    }

    for (i, line) in lines.enumerate() {
        let lineno = i + 2;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [index, mate_in, mv, pieces] = fields[..] else {
            return Err(bad(lineno, format!("expected 4 fields, found {}", fields.len())));
        };

        let index: usize = index
            .parse()
            .map_err(|_| bad(lineno, format!("invalid index '{index}'")))?;
        if index >= tablebase.len() {
            return Err(bad(lineno, format!("index {index} out of range")));
        }
        let mate_in: u32 = mate_in
            .parse()
            .map_err(|_| bad(lineno, format!("invalid mate distance '{mate_in}'")))?;
        if mate_in == 0 || mate_in >= (WHITE_MATE / 2) as u32 {
            return Err(bad(lineno, format!("mate distance {mate_in} out of range")));
        }
        let mv = Move::parse(mv).map_err(|e| bad(lineno, e.to_string()))?;
        check_pieces(tablebase.config(), index, pieces).map_err(|e| match e {
            ChessError::Report { reason, .. } => bad(lineno, reason),
            other => bad(lineno, other.to_string()),
        })?;

        if tablebase.white_entry(index).is_scored() {
            return Err(bad(lineno, format!("index {index} listed twice")));
        }
        tablebase.resolve_white(index, mv.with_score(white_mate_score(mate_in)))?;
    }
    Ok(tablebase)
}

// The listed pieces must be the configured ones, in order, on the squares
// the index decodes to.
fn check_pieces(config: &EndgameConfig, index: usize, listed: &str) -> ChessResult<()> {
    let squares = decode_index(index, config.piece_count())?;
    let tokens: Vec<&str> = listed.split(',').collect();
    if tokens.len() != config.piece_count() {
        return Err(bad(
            0,
            format!("expected {} pieces, found {}", config.piece_count(), tokens.len()),
        ));
    }
    for ((token, &piece), &sq) in tokens.iter().zip(config.pieces()).zip(squares.iter()) {
        let mut chars = token.chars();
        let found = chars.next().and_then(Square::from_char);
        if found != Some(piece) {
            return Err(bad(0, format!("unexpected piece in '{token}'")));
        }
        if parse_cell(chars.as_str())? != square_to_cell(sq) {
            return Err(bad(0, format!("'{token}' does not match index {index}")));
        }
    }
    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P, config: EndgameConfig) -> ChessResult<Tablebase> {
    let path = path.as_ref();
    let tablebase = read(BufReader::new(File::open(path)?), config)?;
    let (white, _) = tablebase.resolved_counts();
    info!("Loaded {} winning positions from {}", white, path.display());
    Ok(tablebase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tablebase {
        let mut tb = Tablebase::new(EndgameConfig::new("q").unwrap());
        // b1 = 1 (slot 1), a3 = 16, c3 = 18
        let index = (64 + 16) * 64 + 18;
        let mv = Move::parse("c3b2").unwrap().with_score(white_mate_score(1));
        tb.resolve_white(index, mv).unwrap();
        tb
    }

    #[test]
    fn writes_header_and_winning_lines() {
        let tb = sample();
        let mut out = Vec::new();
        assert_eq!(write(&mut out, &tb).unwrap(), 1);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "40960\n5138 1 c3b2 kb1,Ka3,Qc3\n");
    }

    #[test]
    fn reads_back_what_it_wrote() {
        let tb = sample();
        let mut out = Vec::new();
        write(&mut out, &tb).unwrap();
        let back = read(out.as_slice(), EndgameConfig::new("q").unwrap()).unwrap();
        assert_eq!(back.white_entry(5138), tb.white_entry(5138));
        assert_eq!(back.resolved_counts(), (1, 0));
    }

    #[test]
    fn rejects_malformed_reports() {
        let config = || EndgameConfig::new("q").unwrap();
        let cases = [
            "",
            "640\n",
            "40960\n5138 1 c3b2\n",
            "40960\n5138 0 c3b2 kb1,Ka3,Qc3\n",
            "40960\n5138 1 c3b2 kb1,Ka3,Rc3\n",
            "40960\n5138 1 c3b2 kb1,Ka3,Qc4\n",
            "40960\n5138 1 c3b2 kb1,Ka3,Qc3\n5138 2 c3b2 kb1,Ka3,Qc3\n",
            "40960\n99999 1 c3b2 kb1,Ka3,Qc3\n",
        ];
        for text in cases {
            let err = read(text.as_bytes(), config()).unwrap_err();
            assert!(matches!(err, ChessError::Report { .. }), "{text:?}: {err}");
        }
    }
}
