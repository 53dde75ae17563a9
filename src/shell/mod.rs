//! Line-oriented command shell over a counting engine
//!
//! Maps text commands (`add 3`, `calc`, `lt 4`, ...) onto a
//! [`DataCapture`](crate::capture::DataCapture) and its summary. Holds no
//! counting logic of its own.
//!
//! # Example
//!
//! ```
//! use rangecount::counting::RangeCountIndex;
//! use rangecount::shell::{Reply, Session, ShellError};
//!
//! let mut session = Session::new(RangeCountIndex::new());
//! session.handle_line("add 3").unwrap();
//! assert_eq!(session.handle_line("lt 4"), Err(ShellError::NotCalculated));
//!
//! session.handle_line("calc").unwrap();
//! assert_eq!(session.handle_line("lt 4"), Ok(Reply::Line("1".into())));
//! ```

mod command;
mod session;

pub use command::{Command, ParseCommandError};
pub use session::{run, Reply, Session, ShellError, FAREWELL, INTRO, PROMPT};
