//! Single-pass state machine over the duration grammar.
//!
//! Each state names the grammar position just passed, so it also fixes
//! which tokens may follow. Unit letters only move forward through
//! `Y M D T H M S`, never back.

use super::ParseOptions;
use super::error::ParseErrorKind;
use crate::interval::Interval;

/// Position reached in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing consumed; expects `P`.
    Start,
    /// After `P`; a date unit, `T`, but not end of input.
    AfterP,
    /// After `Y`; `M`, `D`, `T` or end.
    AfterYears,
    /// After date `M`; `D`, `T` or end.
    AfterMonths,
    /// After `D`; `T` or end.
    AfterDays,
    /// After `T`; `H`, `M`, `S` or end (when allowed).
    AfterT,
    /// After `H`; `M`, `S` or end.
    AfterHours,
    /// After time `M`; `S` or end.
    AfterMinutes,
    /// After `S`; end only.
    AfterSeconds,
}

/// Where and why the machine stopped. Cheap to return; the public error is
/// built from it by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Failure {
    pub kind: ParseErrorKind,
    pub position: usize,
}

struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    const fn bump(&mut self) {
        self.pos += 1;
    }

    const fn fail(&self, kind: ParseErrorKind) -> Failure {
        Failure {
            kind,
            position: self.pos,
        }
    }

    /// Reads `-?\d+`. Digits accumulate toward the sign so `i64::MIN` fits.
    fn signed_int(&mut self) -> Result<i64, Failure> {
        let negative = self.peek() == Some(b'-');
        if negative {
            self.bump();
        }

        match self.peek() {
            Some(b'0'..=b'9') => {}
            Some(_) if negative => return Err(self.fail(ParseErrorKind::ExpectedDigit)),
            Some(_) => return Err(self.fail(ParseErrorKind::FormatMismatch)),
            None => return Err(self.fail(ParseErrorKind::UnexpectedEof)),
        }

        let mut num: i64 = 0;
        while let Some(byte @ b'0'..=b'9') = self.peek() {
            let digit = i64::from(byte - b'0');
            num = num
                .checked_mul(10)
                .and_then(|n| {
                    if negative {
                        n.checked_sub(digit)
                    } else {
                        n.checked_add(digit)
                    }
                })
                .ok_or_else(|| self.fail(ParseErrorKind::FormatMismatch))?;
            self.bump();
        }
        Ok(num)
    }

    /// Reads a number and returns it with the unit letter that follows,
    /// leaving the cursor on the letter.
    fn component(&mut self) -> Result<(i64, u8), Failure> {
        let num = self.signed_int()?;
        match self.peek() {
            Some(unit) => Ok((num, unit)),
            None => Err(self.fail(ParseErrorKind::UnexpectedEof)),
        }
    }
}

/// Runs the machine over `src`.
pub(super) fn run(src: &[u8], options: ParseOptions) -> Result<Interval, Failure> {
    use ParseErrorKind::{FormatMismatch, UnexpectedEof};

    let mut cur = Cursor::new(src);
    let mut out = Interval::ZERO;
    let mut state = State::Start;

    loop {
        state = match state {
            State::Start => match cur.peek() {
                Some(b'P') => {
                    cur.bump();
                    State::AfterP
                }
                Some(_) => return Err(cur.fail(FormatMismatch)),
                None => return Err(cur.fail(UnexpectedEof)),
            },

            State::AfterP
            | State::AfterYears
            | State::AfterMonths
            | State::AfterDays => match cur.peek() {
                // A bare `P` carries no information
                None if state == State::AfterP => return Err(cur.fail(UnexpectedEof)),
                None => return Ok(out),
                Some(b'T') => {
                    cur.bump();
                    State::AfterT
                }
                Some(_) if state == State::AfterDays => return Err(cur.fail(FormatMismatch)),
                Some(_) => {
                    let (num, unit) = cur.component()?;
                    let next = match (state, unit) {
                        (State::AfterP, b'Y') => {
                            out.years = num;
                            State::AfterYears
                        }
                        (State::AfterP | State::AfterYears, b'M') => {
                            out.months = num;
                            State::AfterMonths
                        }
                        (State::AfterP | State::AfterYears | State::AfterMonths, b'D') => {
                            out.days = num;
                            State::AfterDays
                        }
                        _ => return Err(cur.fail(FormatMismatch)),
                    };
                    cur.bump();
                    next
                }
            },

            State::AfterT | State::AfterHours | State::AfterMinutes => match cur.peek() {
                None if state == State::AfterT && !options.allow_empty_time => {
                    return Err(cur.fail(UnexpectedEof));
                }
                None => return Ok(out),
                Some(_) => {
                    let (num, unit) = cur.component()?;
                    let next = match (state, unit) {
                        (State::AfterT, b'H') => {
                            out.hours = num;
                            State::AfterHours
                        }
                        (State::AfterT | State::AfterHours, b'M') => {
                            out.minutes = num;
                            State::AfterMinutes
                        }
                        (_, b'S') => {
                            out.seconds = num;
                            State::AfterSeconds
                        }
                        _ => return Err(cur.fail(FormatMismatch)),
                    };
                    cur.bump();
                    next
                }
            },

            State::AfterSeconds => match cur.peek() {
                None => return Ok(out),
                Some(_) => return Err(cur.fail(FormatMismatch)),
            },
        };
    }
}
