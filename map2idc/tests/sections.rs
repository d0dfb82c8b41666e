use map2idc::Sections;

fn case(text: &str, expects: Vec<(&str, Vec<&str>)>) {
    let sections: Sections = text.parse().unwrap();

    for title in sections.titles() {
        println!("[{}]", title);
        for line in sections.get(title).unwrap() {
            println!("  |{}", line);
        }
    }

    assert_eq!(sections.len(), expects.len());
    for (title, (expect_title, expect_lines)) in sections.titles().zip(expects.iter()) {
        assert_eq!(title, *expect_title);
        assert_eq!(sections.get(title).unwrap(), expect_lines.as_slice());
    }
}

macro_rules! case {
    ($name:ident, $text:expr, [$(($title:expr, [$($line:expr),* $(,)?])),* $(,)?]) => {
        #[test]
        fn $name() {
            case($text, vec![$(($title, vec![$($line),*])),*]);
        }
    };
}

case!(empty, "", []);

case!(
    single,
    "Memory map:\n\n   .init  80003100 00002470 00000100\n   .text  80005570 00010000 00002570\n",
    [(
        "Memory map:",
        [
            "   .init  80003100 00002470 00000100",
            "   .text  80005570 00010000 00002570",
        ]
    )]
);

case!(
    trailing_section_without_blank,
    "A\n x\n\nB\n y",
    [("A", [" x"]), ("B", [" y"])]
);

case!(
    consecutive_blank_lines,
    "A\n\n\n\n x\n\n\n",
    [("A", [" x"])]
);

case!(
    duplicate_title_last_wins,
    "A\n first\n\nB\n b\n\nA\n second\n",
    [("A", [" second"]), ("B", [" b"])]
);

case!(
    title_right_after_body,
    "A\n a1\n a2\nB\n b1\n",
    [("A", [" a1", " a2"]), ("B", [" b1"])]
);

case!(
    crlf_line_breaks,
    "A\r\n a\r\n\r\nB\r\n b\r\n",
    [("A", [" a"]), ("B", [" b"])]
);

case!(
    title_without_body_is_dropped,
    "A\n\nB\n b\n",
    [("B", [" b"])]
);

case!(
    whitespace_only_line_is_body,
    "A\n a\n   \n",
    [("A", [" a", "   "])]
);
