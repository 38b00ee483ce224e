// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fingering quiz: answer checking, timing and the session state machine.

pub mod session;
pub mod timing;
pub mod validator;

pub use session::{
    Feedback, QuizSession, SessionSettings, SessionStatus, SessionView, SubmitOutcome,
    TickOutcome,
};
pub use timing::{Countdown, Epoch, RedrawTicket, TimingMode};
pub use validator::is_correct;
