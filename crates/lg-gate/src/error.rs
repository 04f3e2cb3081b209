use lg_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GateError {
    #[error("gate configuration error: {0}")]
    Config(String),

    #[error("{0} is not in the agent store")]
    UnknownAgent(AgentId),
}

pub type GateResult<T> = Result<T, GateError>;
