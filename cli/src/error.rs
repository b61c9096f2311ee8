use std::fmt::{Display, Formatter, Result};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CmdToolError {
    LoggingInitialization,
}

impl Display for CmdToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::LoggingInitialization => {
                write!(f, "Cannot initialize logging")
            }
        }
    }
}

#[derive(Error, Debug)]
pub(crate) enum MqxCmdError {
    #[error("mqx client error")]
    MqxClient(#[from] mqx::error::MqxError),

    #[error("mqx sdk or command error")]
    CommandError(#[from] anyhow::Error),

    #[error("mqx command line tool error")]
    CmdToolError(#[from] CmdToolError),

    #[error("mqx output error")]
    Output(#[from] std::io::Error),
}
