//! Player-facing text.
//!
//! The game ships in Indonesian only; strings are kept here so the rules
//! modules stay free of presentation concerns.

use crate::puzzle::PuzzleKind;
use crate::state::GameState;

pub const CABLE_SOLVED: &str =
    "Rangkaian listrik berhasil diperbaiki! Listrik mengalir dalam rangkaian tertutup.";
pub const CABLE_REJECTED: &str = "Rangkaian terbuka atau salah sambung. Arus tidak mengalir.";
pub const CABLE_HINT: &str =
    "Hubungkan komponen dalam urutan yang benar: Baterai (+) → Saklar → Lampu → Baterai (-)";

pub const EFFICIENCY_SOLVED: &str =
    "Efisiensi energi tercapai! Menutup kulkas dengan cepat menghemat energi.";
pub const EFFICIENCY_HINT: &str = "Atur peralatan agar Power Meter tetap hijau (efisien)";

pub const BILLING_SOLVED: &str =
    "Tagihan listrik efisien tercapai! Blueprint alat rahasia ilmuwan ditemukan.";

pub const DOOR_OPENED: &str = "Semua Kunci Energi telah dikumpulkan! Pintu rahasia terbuka.";
pub const DOOR_LOCKED: &str = "Kumpulkan semua Kunci Energi terlebih dahulu!";

pub const ANSWER_CORRECT: &str = "Jawaban benar!";
pub const ANSWER_WRONG: &str = "Jawaban salah!";

pub const NO_SAVE_FOUND: &str = "Tidak ada data penyimpanan ditemukan!";
pub const GAME_SAVED: &str = "Permainan tersimpan.";
pub const SAVE_FAILED: &str = "Gagal menyimpan permainan.";

pub const LOADING_DONE: &str = "Siap memulai petualangan!";

pub const ENDING_TITLE: &str = "Selamat! Misteri telah terpecahkan!";
pub const ENDING_SUBTITLE: &str = "Ilmuwan telah ditemukan kembali.";
pub const ENDING_CHARACTER: &str = "Gunakanlah pengetahuan ini dalam kehidupan nyata, dan jadilah generasi yang hemat energi.";

/// Instruction shown when a state is entered, if it has one.
pub fn instructions(state: GameState) -> Option<&'static str> {
    match state {
        GameState::Level1 => Some("Jelajahi ruang tamu dan perbaiki rangkaian listrik!"),
        GameState::Level2 => Some("Kelola peralatan dapur dengan efisien!"),
        GameState::Level3 => Some("Atur konsumsi energi agar tidak melebihi batas tagihan!"),
        GameState::Level4 => Some("Gunakan semua Kunci Energi untuk membuka pintu rahasia!"),
        _ => None,
    }
}

/// Hint shown when a puzzle panel opens, if the panel has one.
pub fn panel_hint(kind: PuzzleKind) -> Option<&'static str> {
    match kind {
        PuzzleKind::Cable => Some(CABLE_HINT),
        PuzzleKind::Efficiency => Some(EFFICIENCY_HINT),
        PuzzleKind::Simulator | PuzzleKind::Door => None,
    }
}

/// Loading screen caption for a progress percentage.
pub fn loading_progress(percent: u32) -> String {
    if percent < 100 {
        format!("Memuat aset 3D... {percent}%")
    } else {
        LOADING_DONE.to_string()
    }
}

/// Loading screen notice when some models could not be loaded.
pub fn assets_failed(count: usize) -> String {
    format!("Gagal memuat {count} aset 3D. Tekan R untuk mencoba lagi.")
}

/// Quiz result line, e.g. `Quiz selesai! Skor: 7/10 (70%) - Lulus!`.
pub fn quiz_finished(score: usize, total: usize, percent: u32, passed: bool) -> String {
    let verdict = if passed { "Lulus!" } else { "Coba lagi!" };
    format!("Quiz selesai! Skor: {score}/{total} ({percent}%) - {verdict}")
}

/// Quiz progress caption, e.g. `Soal 3 dari 10`.
pub fn quiz_progress(index: usize, total: usize) -> String {
    format!("Soal {} dari {}", index + 1, total)
}
