#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked or typed a destination folder.
    DestinationChosen(String),
    /// User clicked Download Logos.
    DownloadClicked,
    /// User clicked Cancel Download.
    CancelClicked,
    /// Engine progress for the running session, 0..=100.
    HarvestProgress(u8),
    /// Engine status line for the running session.
    HarvestStatus(String),
    /// Engine terminal event; the session is over.
    HarvestFinished { result: crate::RunResult },
}
