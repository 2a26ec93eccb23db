#[cfg(test)]
mod verify {
    use yamlet::formatting::{render, Identity};
    use yamlet::language::*;
    use yamlet::parsing::{self, parse_source, Origin, ParseFailure, ParsingError};
    use yamlet::store::{free, lookup, LookupError};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    fn scalar(text: &str) -> Node {
        Node::Scalar(text.to_string())
    }

    #[test]
    fn flat_mapping() {
        let document = parsing::parse("name: Alice\nage: 30\n").unwrap();
        assert_eq!(
            document.root,
            Node::Mapping(vec![
                ("name".to_string(), scalar("Alice")),
                ("age".to_string(), scalar("30"))
            ])
        );
    }

    #[test]
    fn mapping_with_sequence() {
        let document = parsing::parse("items:\n  - one\n  - two\n").unwrap();
        assert_eq!(
            document.root,
            Node::Mapping(vec![(
                "items".to_string(),
                Node::Sequence(vec![scalar("one"), scalar("two")])
            )])
        );
    }

    #[test]
    fn looking_up_values() {
        let document = parsing::parse("name: Alice\nage: 30\n").unwrap();

        let result = lookup(&document, &[Segment::Key("age".to_string())]);
        assert_eq!(result, Ok(&scalar("30")));

        let result = lookup(&document, &[Segment::Key("missing".to_string())]);
        assert_eq!(
            result,
            Err(LookupError::MissingKey {
                position: 0,
                key: "missing".to_string()
            })
        );
    }

    #[test]
    fn lookups_are_repeatable() {
        let document = parsing::parse(trim(
            r#"
servers:
  - name: alpha
    port: 80
  - name: beta
    port: 81
            "#,
        ))
        .unwrap();
        let before = document.clone();

        let path = Path::parse("servers.1.port");
        let first = document.lookup(path.segments());
        let second = document.lookup(path.segments());
        assert_eq!(first, Ok(&scalar("81")));
        assert_eq!(first, second);

        let path = Path::parse("servers.2.port");
        assert_eq!(
            document.lookup(path.segments()),
            Err(LookupError::IndexOutOfRange {
                position: 1,
                index: 2,
                length: 2
            })
        );

        assert_eq!(document, before);
    }

    #[test]
    fn depth_follows_indent_transitions() {
        let shallow = parsing::parse("outer:\n  list:\n    - leaf\n").unwrap();
        let wide = parsing::parse("outer:\n        list:\n                 - leaf\n").unwrap();
        let uneven = parsing::parse("outer:\n list:\n          - leaf\n").unwrap();

        assert_eq!(
            shallow
                .root()
                .depth(),
            3
        );
        assert_eq!(shallow, wide);
        assert_eq!(shallow, uneven);
    }

    #[test]
    fn round_trip_and_free() {
        let content = trim(
            r#"
title: "A \"quoted\" title"
owner:
  name: Alice
  roles:
    - admin
    - "power user"
matrix:
  -
    - 1
    - 2
  -
    - 3
            "#,
        );
        let document = parsing::parse(content).unwrap();
        let nodes = document
            .root()
            .count();

        let text = render(&Identity, &document);
        let again = parsing::parse(&text).unwrap();
        assert_eq!(again, document);

        assert_eq!(free(again), nodes);
        assert_eq!(free(document), nodes);
    }

    #[test]
    fn document_outlives_source() {
        let document = {
            let content = String::from("key: \"value\"\n");
            parsing::parse(&content).unwrap()
        };
        assert_eq!(document.lookup_str("key"), Ok(&scalar("value")));
    }

    #[test]
    fn parsing_from_memory() {
        let document = parse_source(b"- a\n- b\n", Origin::Memory).unwrap();
        assert_eq!(
            document.root,
            Node::Sequence(vec![scalar("a"), scalar("b")])
        );

        let result = parse_source(b"", Origin::Memory);
        assert_eq!(result, Err(ParseFailure::Parsing(ParsingError::EmptyInput)));
    }

    #[test]
    fn parsing_from_disk() {
        let document = parse_source(b"tests/samples/person.yaml", Origin::Disk).unwrap();
        assert_eq!(document.lookup_str("name"), Ok(&scalar("Alice")));
        assert_eq!(
            document.lookup_str("email"),
            Ok(&scalar("alice@example.com"))
        );

        let result = parse_source(b"tests/samples/nonexistent.yaml", Origin::Disk);
        match result {
            Err(ParseFailure::Loading(error)) => {
                assert_eq!(error.problem, "File not found");
            }
            other => panic!("expected a loading failure, got {:?}", other),
        }
    }
}
