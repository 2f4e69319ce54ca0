//! Full-stack tests: script source in, played session out.

mod manor;
mod scenarios;
