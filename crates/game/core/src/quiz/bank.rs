use crate::config::GameConfig;

/// A multiple-choice question with exactly four options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; GameConfig::QUIZ_OPTION_COUNT],
    /// Index into `options`.
    pub correct: usize,
}

impl QuizQuestion {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct
    }

    pub fn correct_text(&self) -> &'static str {
        self.options[self.correct]
    }
}

/// The canonical bank, in authoring order. Sessions shuffle a copy.
pub const QUESTION_BANK: [QuizQuestion; 10] = [
    QuizQuestion {
        prompt: "Apa yang terjadi jika rangkaian listrik terbuka?",
        options: [
            "Arus mengalir",
            "Arus tidak mengalir",
            "Tegangan naik",
            "Daya bertambah",
        ],
        correct: 1,
    },
    QuizQuestion {
        prompt: "Fungsi saklar dalam rangkaian listrik adalah...",
        options: [
            "Meningkatkan tegangan",
            "Memutus dan menghubungkan arus",
            "Mengubah arus AC ke DC",
            "Menyimpan energi",
        ],
        correct: 1,
    },
    QuizQuestion {
        prompt: "Satuan daya listrik adalah...",
        options: ["Volt", "Ampere", "Watt", "Ohm"],
        correct: 2,
    },
    QuizQuestion {
        prompt: "Cara menghemat energi di rumah adalah...",
        options: [
            "Membiarkan lampu menyala terus",
            "Mematikan peralatan yang tidak digunakan",
            "Menggunakan AC 24 jam",
            "Membuka kulkas terus-menerus",
        ],
        correct: 1,
    },
    QuizQuestion {
        prompt: "Rumus energi listrik adalah...",
        options: ["E = P × t", "E = V × I", "E = P / t", "E = V / I"],
        correct: 0,
    },
    QuizQuestion {
        prompt: "Kulkas yang pintunya dibiarkan terbuka akan...",
        options: [
            "Menghemat energi",
            "Memboroskan energi",
            "Tidak berpengaruh",
            "Meningkatkan efisiensi",
        ],
        correct: 1,
    },
    QuizQuestion {
        prompt: "Lampu LED lebih efisien daripada lampu pijar karena...",
        options: [
            "Lebih terang",
            "Menggunakan daya lebih sedikit",
            "Lebih murah",
            "Lebih besar",
        ],
        correct: 1,
    },
    QuizQuestion {
        prompt: "Tagihan listrik dihitung berdasarkan...",
        options: ["Tegangan", "Arus", "Energi yang digunakan", "Daya maksimum"],
        correct: 2,
    },
    QuizQuestion {
        prompt: "AC yang disetel pada suhu rendah akan...",
        options: [
            "Menghemat energi",
            "Memboroskan energi",
            "Tidak berpengaruh",
            "Meningkatkan efisiensi",
        ],
        correct: 1,
    },
    QuizQuestion {
        prompt: "Standby mode pada peralatan elektronik...",
        options: [
            "Tidak menggunakan energi",
            "Masih menggunakan sedikit energi",
            "Menggunakan energi penuh",
            "Menghemat energi total",
        ],
        correct: 1,
    },
];
