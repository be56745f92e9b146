//! Top-level modal state: whether the simulation runs, is paused, or sits
//! behind one of the settings dialogs.
//!
//! A single enum replaces independent `paused` / `show_settings` /
//! `show_theme_change` flags, so combinations such as "paused while editing
//! the theme" cannot be represented.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionMode {
    #[default]
    Running,
    Paused,
    Settings,
    ThemeEdit,
    ParamEdit,
}

impl SessionMode {
    /// Physics, dragging and telemetry only advance in `Running`.
    #[inline]
    pub fn simulates(self) -> bool {
        self == SessionMode::Running
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionMode::Running => "Running",
            SessionMode::Paused => "Paused",
            SessionMode::Settings => "Settings",
            SessionMode::ThemeEdit => "ThemeEdit",
            SessionMode::ParamEdit => "ParamEdit",
        };
        f.write_str(name)
    }
}

/// Outcome of a modal dialog for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogChoice {
    Resume,
    OpenSettings,
    Exit,
    ChangeTheme,
    EditParameters,
    Back,
    #[default]
    None,
}

impl DialogChoice {
    /// Pause dialog button codes: 1 Resume, 2 Settings, 3 Exit.
    #[inline]
    pub fn from_pause_code(code: i32) -> Self {
        match code {
            1 => DialogChoice::Resume,
            2 => DialogChoice::OpenSettings,
            3 => DialogChoice::Exit,
            _ => DialogChoice::None,
        }
    }

    /// Settings dialog button codes: 1 Change Parameters, 2 Change Theme, 3 Back.
    #[inline]
    pub fn from_settings_code(code: i32) -> Self {
        match code {
            1 => DialogChoice::EditParameters,
            2 => DialogChoice::ChangeTheme,
            3 => DialogChoice::Back,
            _ => DialogChoice::None,
        }
    }
}

/// Discrete UI event that may drive a mode transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    EscapePressed,
    Dialog(DialogChoice),
    CloseRequested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Move to (possibly the same) mode.
    To(SessionMode),
    /// The session loop should end.
    Terminate,
    /// The event means nothing in the current mode.
    Ignored,
}

/// Pure transition table.
pub fn next_mode(mode: SessionMode, event: SessionEvent) -> Transition {
    use crate::session::DialogChoice as D;
    use crate::session::SessionEvent as E;
    use crate::session::SessionMode as M;

    match (mode, event) {
        (_, E::CloseRequested) => Transition::Terminate,

        (M::Running, E::EscapePressed) => Transition::To(M::Paused),
        (M::Paused, E::EscapePressed) => Transition::To(M::Running),
        (M::Settings, E::EscapePressed) => Transition::To(M::Paused),
        (M::ThemeEdit | M::ParamEdit, E::EscapePressed) => Transition::To(M::Settings),

        (M::Paused, E::Dialog(D::Resume)) => Transition::To(M::Running),
        (M::Paused, E::Dialog(D::OpenSettings)) => Transition::To(M::Settings),
        (M::Paused, E::Dialog(D::Exit)) => Transition::Terminate,

        (M::Settings, E::Dialog(D::EditParameters)) => Transition::To(M::ParamEdit),
        (M::Settings, E::Dialog(D::ChangeTheme)) => Transition::To(M::ThemeEdit),
        (M::Settings, E::Dialog(D::Back)) => Transition::To(M::Paused),

        (M::ThemeEdit | M::ParamEdit, E::Dialog(D::Back)) => Transition::To(M::Settings),

        _ => Transition::Ignored,
    }
}

/// Owned session state: the current mode plus whether the loop should keep going.
#[derive(Clone, Debug, Default)]
pub struct Session {
    mode: SessionMode,
    terminated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Apply one event. Events after termination are ignored.
    pub fn handle(&mut self, event: SessionEvent) -> Transition {
        if self.terminated {
            return Transition::Ignored;
        }
        let t = next_mode(self.mode, event);
        match t {
            Transition::To(next) => {
                if next != self.mode {
                    log::info!("[session] {} -> {}", self.mode, next);
                }
                self.mode = next;
            }
            Transition::Terminate => {
                log::info!("[session] exit requested from {}", self.mode);
                self.terminated = true;
            }
            Transition::Ignored => {
                log::debug!("[session] ignored {:?} in {}", event, self.mode);
            }
        }
        t
    }

    /// Back to `Running`, clearing termination.
    pub fn reset(&mut self) {
        self.mode = SessionMode::Running;
        self.terminated = false;
    }
}
