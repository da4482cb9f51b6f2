#![allow(dead_code)]

pub const ENGLISH: &str = "Hello, world! This is a short sentence.";

pub const GERMAN: &str = "Die pünktlich gewünschte Trüffelfüllung im übergestülpten Würzkümmel-Würfel ist kümmerlich und dürfte fürderhin zu Rüffeln in Hülle und Fülle führen";

pub const FRENCH: &str = "Le cœur a ses raisons que la raison ne connaît point.";

pub const POLISH: &str = "Zażółć gęślą jaźń, proszę bardzo.";

pub const CHINESE: &str = "道德經是一部哲學著作。";

pub const JAPANESE: &str = "羅生門は芥川龍之介の小説です。";

pub const KOREAN: &str = "안녕하세요 세계";

pub const NUMBERS: &str = "The total is 1,234,567.89 dollars";

pub const CODE: &str = "fn main() { println!(\"hi\"); }";

pub const URL: &str = "https://example.com/path?query=value";

pub const ARABIC: &str = "مرحبا بالعالم";

pub const EMOJI: &str = "I love 🦀🦀🦀🦀🦀🦀🦀 crabs";

pub const MULTILINE: &str = "First line.\n\n\tIndented second line -- with dashes!\r\n  Third:   done.";

pub fn corpus() -> Vec<&'static str> {
    vec![
        ENGLISH, GERMAN, FRENCH, POLISH, CHINESE, JAPANESE, KOREAN, NUMBERS, CODE, URL, ARABIC,
        EMOJI, MULTILINE, "", " ", "a", "...", "\u{3000}全角\u{3000}スペース",
    ]
}
