use std::sync::{Arc, RwLock};

use maglev::{
    ConfigError, FlowKey, HashKeys, Maglev, MaglevConfig, MaglevError, TableError, hash,
};

const STRAWBERRY: &str = "strawberry-habanero.MIT.EDU";
const CHEESY: &str = "cheesy-fries.MIT.EDU";

fn init_tracing() {
    #[cfg(feature = "tracing")]
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn backends(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("backend-{i}")).collect()
}

#[test]
fn mit_scenario() {
    init_tracing();

    let mut maglev = Maglev::new([STRAWBERRY.to_owned(), CHEESY.to_owned()], 13).unwrap();
    assert_eq!(
        maglev.lookup_table(),
        [1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1]
    );
    assert_eq!(
        maglev.get("19.168.124.100/572/81.9.179.69/80/4").unwrap(),
        CHEESY
    );

    maglev.remove(STRAWBERRY).unwrap();
    assert_eq!(maglev.lookup_table(), [0; 13]);
    assert_eq!(
        maglev.get("19.168.124.100/572/81.9.179.69/80/4").unwrap(),
        CHEESY
    );
}

#[test]
fn independent_instances_agree() {
    let a = Maglev::new(backends(5), 1009).unwrap();
    let b = Maglev::new(backends(5), 1009).unwrap();

    assert_eq!(a.lookup_table(), b.lookup_table());
    for i in 0..200 {
        let key = format!("10.0.0.{i}/4000/10.1.0.1/443/6");
        assert_eq!(a.get(&key), b.get(&key));
    }
}

#[test]
fn lookup_hash_is_siphash_of_key() {
    let maglev = Maglev::new(backends(3), 251).unwrap();
    let key = "192.168.1.0/50266/81.209.179.69/80/6";

    let slot = hash(maglev.hash_keys().lookup, 0, key.as_bytes()) % 251;
    assert_eq!(maglev.slot(key) as u64, slot);
    assert_eq!(
        maglev.get(key).unwrap(),
        &maglev.backends()[maglev.lookup_table()[maglev.slot(key)]]
    );
}

#[test]
fn production_size_balance() {
    let maglev = Maglev::new(backends(8), 65537).unwrap();
    let counts = maglev.distribution();

    assert_eq!(counts.iter().sum::<usize>(), 65537);
    assert_eq!(counts.iter().max(), Some(&8193));
    assert_eq!(counts.iter().min(), Some(&8192));
}

#[test]
fn removal_disruption_is_bounded() {
    init_tracing();

    let before = Maglev::new(backends(5), 65537).unwrap();
    let mut after = before.clone();
    after.remove("backend-2").unwrap();

    let owned = before.distribution()[2];
    let moved = before.changed_slots(&after).count();

    // Every slot of the removed backend moves; others move only rarely.
    assert!(moved >= owned);
    assert!(moved - owned < 65537 / 100, "collateral moves: {}", moved - owned);

    for slot in before.changed_slots(&after) {
        let new_owner = &after.backends()[after.lookup_table()[slot]];
        assert_ne!(new_owner, "backend-2");
    }
}

#[test]
fn addition_disruption_is_bounded() {
    let before = Maglev::new(backends(4), 65537).unwrap();
    let mut after = before.clone();
    after.add("backend-4".to_owned()).unwrap();

    let gained = after.distribution()[4];
    let moved = after.changed_slots(&before).count();

    assert!(moved >= gained);
    assert!(moved - gained < 65537 / 100, "collateral moves: {}", moved - gained);
}

#[test]
fn failed_mutations_change_nothing() {
    let mut maglev = Maglev::new(backends(3), 101).unwrap();
    let snapshot = maglev.clone();

    assert_eq!(
        maglev.add("backend-1".to_owned()),
        Err(TableError::AlreadyExists("backend-1".to_owned()))
    );
    assert_eq!(
        maglev.remove("backend-9"),
        Err(TableError::NotFound("backend-9".to_owned()))
    );

    assert_eq!(maglev.backends(), snapshot.backends());
    assert_eq!(maglev.lookup_table(), snapshot.lookup_table());
    assert_eq!(maglev.permutations(), snapshot.permutations());
}

#[test]
fn config_errors() {
    let config = MaglevConfig::new(13).with_keys(HashKeys {
        offset: 7,
        skip: 7,
        lookup: 8,
    });

    assert_eq!(
        Maglev::with_config([CHEESY], &config).unwrap_err(),
        MaglevError::Config(ConfigError::NonDistinctKeys)
    );
    assert_eq!(
        Maglev::new([CHEESY], 1).unwrap_err(),
        MaglevError::Config(ConfigError::TableSizeTooSmall(1))
    );
    assert_eq!(
        Maglev::new([CHEESY], 65536).unwrap_err().to_string(),
        "maglev error: config error: table size 65536 is not prime"
    );
}

#[test]
fn flow_key_errors_convert() {
    fn owner(maglev: &Maglev, key: &str) -> Result<String, MaglevError> {
        let flow = key.parse::<FlowKey>()?;
        Ok(maglev.get_flow(&flow)?.clone())
    }

    let maglev = Maglev::new([STRAWBERRY.to_owned(), CHEESY.to_owned()], 13).unwrap();

    assert_eq!(
        owner(&maglev, "192.16.124.100/50270/81.209.179.69/80/6").unwrap(),
        STRAWBERRY
    );
    assert!(matches!(
        owner(&maglev, "192.16.124.100/50270"),
        Err(MaglevError::Flow(_))
    ));
    assert!(matches!(
        owner(&Maglev::new([], 13).unwrap(), "1.2.3.4/1/5.6.7.8/2/6"),
        Err(MaglevError::Table(TableError::EmptyTable))
    ));
}

#[test]
fn copy_on_write_swap() {
    let shared = Arc::new(RwLock::new(Arc::new(
        Maglev::new(backends(3), 251).unwrap(),
    )));
    let key = "12.168.12.100/50268/81.209.179.69/80/6";

    let reader = Arc::clone(&shared.read().unwrap());

    let mut next = (*reader).clone();
    next.add("backend-3".to_owned()).unwrap();
    *shared.write().unwrap() = Arc::new(next);

    // The old snapshot is still whole.
    assert_eq!(reader.len(), 3);
    assert!(reader.get(key).is_ok());
    assert_eq!(shared.read().unwrap().len(), 4);
}
