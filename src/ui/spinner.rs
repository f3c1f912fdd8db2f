/// Braille frames for the loading spinner
const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn spinner(frame: u64) -> char {
    FRAMES[frame as usize % FRAMES.len()]
}
