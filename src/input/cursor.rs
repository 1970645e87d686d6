use std::sync::{Arc, Mutex};

use crate::landmarks::Point;

pub trait CursorPositionProvider: Send + Sync {
    fn cursor_position(&self) -> Option<(f32, f32)>;
}

/// Reads the real OS cursor. Only Windows exposes it; elsewhere it reports
/// nothing and the fail-safe falls back to the last commanded position.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCursorPosition;

impl CursorPositionProvider for SystemCursorPosition {
    fn cursor_position(&self) -> Option<(f32, f32)> {
        get_cursor_position()
    }
}

/// Cursor position set explicitly, shared between clones.
#[derive(Debug, Default, Clone)]
pub struct FixedCursorPosition {
    position: Arc<Mutex<Option<Point>>>,
}

impl FixedCursorPosition {
    pub fn new(position: Option<Point>) -> Self {
        Self {
            position: Arc::new(Mutex::new(position)),
        }
    }

    pub fn set(&self, position: Option<Point>) {
        if let Ok(mut guard) = self.position.lock() {
            *guard = position;
        }
    }
}

impl CursorPositionProvider for FixedCursorPosition {
    fn cursor_position(&self) -> Option<(f32, f32)> {
        let guard = self.position.lock().ok()?;
        guard.map(|p| (p.x, p.y))
    }
}

pub fn default_cursor_provider() -> Arc<dyn CursorPositionProvider> {
    Arc::new(SystemCursorPosition)
}

#[cfg(windows)]
fn get_cursor_position() -> Option<(f32, f32)> {
    use windows::Win32::Foundation::POINT;
    use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

    let mut point = POINT { x: 0, y: 0 };
    if unsafe { GetCursorPos(&mut point).is_ok() } {
        Some((point.x as f32, point.y as f32))
    } else {
        None
    }
}

#[cfg(not(windows))]
fn get_cursor_position() -> Option<(f32, f32)> {
    None
}
