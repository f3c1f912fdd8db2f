use ratatui::style::Color;

// Primary brand colors
pub const ACCENT: Color = Color::Rgb(95, 170, 160);        // #5FAAA0 - muted teal
pub const ACCENT_DIM: Color = Color::Rgb(75, 140, 132);    // Dimmed teal
pub const WARNING: Color = Color::Rgb(229, 192, 123);      // Warm amber
pub const ERROR: Color = Color::Rgb(255, 85, 85);          // Soft red

// Text colors
pub const TEXT: Color = Color::Rgb(240, 240, 240);         // #f0f0f0 - primary text
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180); // Secondary text
pub const TEXT_MUTED: Color = Color::Rgb(144, 144, 144);   // #909090 - muted text

// Background colors
pub const BG_BASE: Color = Color::Rgb(32, 34, 36);         // #202224 - darkest background
pub const BG_SURFACE: Color = Color::Rgb(48, 50, 53);      // #303235 - overlays
pub const BG_INPUT: Color = Color::Rgb(56, 58, 62);        // #383a3e - input fields

// Border colors
pub const BORDER: Color = Color::Rgb(66, 68, 72);          // Subtle border
pub const BORDER_FOCUS: Color = Color::Rgb(95, 170, 160);  // Accent color for focus
