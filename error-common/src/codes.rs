// Stable error codes surfaced alongside user-visible failures

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
}

pub mod session {
    pub const NOT_LOGGED_IN: &str = "SESSION_2001";
    pub const UNKNOWN_ROLE: &str = "SESSION_2002";
}

pub mod scheduling {
    pub const SLOT_CONFLICT: &str = "SCHED_3001";
    pub const PATIENT_NOT_FOUND: &str = "SCHED_3002";
}

pub mod workflow {
    pub const STEPS_INCOMPLETE: &str = "FLOW_4001";
}

pub mod assistant {
    /// Message empty or over the length limit
    pub const MESSAGE_REJECTED: &str = "CHAT_5001";
}

pub mod system {
    pub const CONFIGURATION: &str = "SYS_9001";
    pub const INTERNAL: &str = "SYS_9002";
}
