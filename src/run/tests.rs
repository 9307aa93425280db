#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn parse(args: &[&str]) -> Command {
    let argv = std::iter::once("mesoledger").chain(args.iter().copied());
    Cli::try_parse_from(argv).unwrap().command
}

#[test]
fn test_boss_order_parses_ids() {
    let Command::BossOrder { ids } = parse(&["boss-order", "3", "1", "2"]) else {
        panic!("expected boss-order");
    };
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_boss_order_accepts_empty_list() {
    let Command::BossOrder { ids } = parse(&["boss-order"]) else {
        panic!("expected boss-order");
    };
    assert!(ids.is_empty());
}

#[test]
fn test_empty_boss_order_on_empty_registry() {
    let mut db = Database::open_in_memory().unwrap();
    as_cli(parse(&["boss-order"]), &mut db).unwrap();
}

#[test]
fn test_empty_boss_order_rejected_with_bosses() {
    let mut db = Database::open_in_memory().unwrap();
    db.create_boss("자쿰", dec!(2000000)).unwrap();
    assert!(as_cli(parse(&["boss-order"]), &mut db).is_err());
    assert_eq!(db.get_bosses().unwrap().len(), 1);
}
