// Quick demo: build a small vocabulary and extract labeled spans.
use valley_trie::{KeywordTrie, Vocabulary};

fn main() {
    let vocab = Vocabulary::labeled_groups(vec![
        (
            "\u{8BBE}\u{5907}".to_string(),
            vec![
                "GPS".to_string(),
                "\u{8BBE}\u{5907}".to_string(),
                "\u{6316}\u{6398}\u{673A}".to_string(),
            ],
        ),
        (
            "\u{52A8}\u{4F5C}".to_string(),
            vec!["\u{68C0}\u{6D4B}".to_string(), "\u{6D4B}\u{8BD5}".to_string()],
        ),
    ]);

    let mut trie = KeywordTrie::from_vocabulary(vocab, false);
    println!("{} keywords, {} trie nodes", trie.len(), trie.node_count());

    let samples = [
        "\u{6211}\u{6709}\u{4E00}\u{53F0}gps\u{8BBE}\u{5907}",
        "\u{6316}\u{6398}\u{673A}\u{9700}\u{8981}\u{68C0}\u{6D4B}",
        "no keywords here",
    ];

    for text in &samples {
        let matches = trie.scan(text, true);
        println!("\n{text}");
        if matches.is_empty() {
            println!("  (no matches)");
        }
        for m in &matches {
            println!("  [{}..{}] {} -> {}", m.start, m.end, m.keyword, m.label);
        }
    }

    // Mutation rebuilds the automaton in place.
    trie.remove("gps");
    let matches = trie.scan("\u{6211}\u{6709}\u{4E00}\u{53F0}gps\u{8BBE}\u{5907}", true);
    println!("\nafter removing gps: {} match(es)", matches.len());
}
