#![no_std]

use core::hash::BuildHasherDefault;
use core::hash::Hasher;

use polyset::config::Config;
use polyset::element::Element;
use polyset::keyspace::InMemoryKeySpace;
use polyset::{Commands, PolySet};

#[derive(Default)]
struct BadHasher(u64);

impl Hasher for BadHasher {
    fn finish(&self) -> u64 {
        self.0
    }
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 += byte as u64
        }
    }
}

type Bh = BuildHasherDefault<BadHasher>;
type Set = PolySet<Bh>;
type KeySpace = InMemoryKeySpace<Bh>;

pub fn test_compile() {
    let mut set: Set = PolySet::new(Config::default(), Element::from(1_i64));
    set.add(Element::from("hello"));
    for _elem in set.iter() {}

    let mut ks = KeySpace::default();
    let mut events = polyset::events::VecEventSink::default();
    let mut propagation = polyset::events::VecPropagationSink::default();
    let mut cmd: Commands<'_, Bh, KeySpace, _, _> =
        Commands::new(&mut ks, &mut events, &mut propagation, Config::default());
    let _ = cmd.add("s", [Element::from(1_i64), Element::from(2_i64)]);
}
