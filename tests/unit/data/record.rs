use super::*;

const CSV: &str = "\
name,rating,genre,year,released,score,votes,company,budget,gross,runtime
Alpha,PG,Action,2010,x,7.5,1200,Lucasfilm,1000000,5000000,120
\"Beta, the Sequel\",R,Drama, 2011 ,x,abc,,Warner Bros.,,250000.5,99
Gamma,PG,Comedy,2012.0,x,6,12.5,Universal,0,1e6,90
";

#[test]
fn parses_rows_and_ignores_extra_columns() {
    let records = parse_records(CSV.as_bytes()).unwrap();
    assert_eq!(records.len(), 3);

    let a = &records[0];
    assert_eq!(a.name, "Alpha");
    assert_eq!(a.genre, "Action");
    assert_eq!(a.company, "Lucasfilm");
    assert_eq!(a.year, Some(2010));
    assert_eq!(a.score, 7.5);
    assert_eq!(a.budget, 1_000_000.0);
    assert_eq!(a.gross, 5_000_000.0);
    assert_eq!(a.votes, Some(1200));
}

#[test]
fn malformed_numbers_coerce_instead_of_failing() {
    let records = parse_records(CSV.as_bytes()).unwrap();

    let b = &records[1];
    assert_eq!(b.name, "Beta, the Sequel");
    assert_eq!(b.year, Some(2011));
    assert!(b.score.is_nan());
    assert!(b.budget.is_nan());
    assert_eq!(b.gross, 250_000.5);
    assert_eq!(b.votes, None);

    let c = &records[2];
    assert_eq!(c.year, Some(2012));
    assert_eq!(c.score, 6.0);
    assert_eq!(c.budget, 0.0);
    assert_eq!(c.gross, 1_000_000.0);
    assert_eq!(c.votes, None);
}

#[test]
fn missing_required_column_is_a_data_error() {
    let csv = "name,genre,company,year,score,budget,gross\nA,B,C,2010,1,2,3\n";
    let err = parse_records(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::Data(_)));
    assert!(err.to_string().contains("votes"));
}

#[test]
fn short_rows_keep_loading_with_missing_cells() {
    let csv = "name,genre,company,year,score,budget,gross,votes\n\
               A,Action,Lucasfilm,2010,7,2,3,4\n\
               B,Drama,Universal,2011,6,5,9\n\
               C,Comedy\n";
    let records = parse_records(csv.as_bytes()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].votes, Some(4));

    let b = &records[1];
    assert_eq!((b.name.as_str(), b.year), ("B", Some(2011)));
    assert_eq!(b.gross, 9.0);
    assert_eq!(b.votes, None);

    let c = &records[2];
    assert_eq!(c.genre, "Comedy");
    assert_eq!(c.company, "");
    assert_eq!(c.year, None);
    assert!(c.score.is_nan() && c.budget.is_nan() && c.gross.is_nan());
}

#[test]
fn invalid_utf8_cells_are_decoded_lossily() {
    let mut csv = b"name,genre,company,year,score,budget,gross,votes\n".to_vec();
    csv.extend_from_slice(b"A,Action,Lucasfilm,2010,7,2,3,4\n");
    csv.extend_from_slice(b"B\xff,Drama,Universal,2011,6,5,9,10\n");
    let records = parse_records(csv.as_slice()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "A");
    assert_eq!(records[1].name, "B\u{fffd}");
    assert_eq!(records[1].score, 6.0);
    assert_eq!(records[1].votes, Some(10));
}

#[test]
fn integer_coercion_rules() {
    assert_eq!(coerce_integer("42"), Some(42));
    assert_eq!(coerce_integer(" 7 "), Some(7));
    assert_eq!(coerce_integer("2010.0"), Some(2010));
    assert_eq!(coerce_integer("2010.5"), None);
    assert_eq!(coerce_integer(""), None);
    assert_eq!(coerce_integer("n/a"), None);
}

#[test]
fn real_coercion_rules() {
    assert_eq!(coerce_real("1.5"), 1.5);
    assert_eq!(coerce_real(" 3 "), 3.0);
    assert!(coerce_real("").is_nan());
    assert!(coerce_real("twelve").is_nan());
}
