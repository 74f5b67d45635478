// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;

use clogforth::FilterMode;
use clogforth::Logger;
use clogforth::Outcome;
use clogforth::config::MAX_TAG_FILTERS;
use clogforth::record::Record;
use rand::Rng;
use rand::seq::IndexedRandom;

fn collecting() -> (Logger, Arc<Mutex<Vec<String>>>) {
    let tags = Arc::new(Mutex::new(Vec::new()));
    let seen = tags.clone();
    let logger = clogforth::builder()
        .sink(move |record: &Record<'_>| seen.lock().unwrap().push(record.tag().to_string()))
        .build();
    (logger, tags)
}

fn emit_all(logger: &Logger, tags: &[&str]) {
    for tag in tags {
        clogforth::info!(logger, tag, "message for {}", tag);
    }
}

#[test]
fn whitelist_admits_only_enabled_tags() {
    let (logger, seen) = collecting();

    assert_eq!(logger.enable_tag("Database"), Outcome::Inserted);
    assert_eq!(logger.filter_mode(), FilterMode::Whitelist);
    emit_all(&logger, &["Database", "Network", "Storage"]);

    assert_eq!(*seen.lock().unwrap(), ["Database"]);
}

#[test]
fn blacklist_drops_disabled_tags() {
    let (logger, seen) = collecting();

    logger.disable_tag("Network");
    assert_eq!(logger.filter_mode(), FilterMode::Blacklist);
    emit_all(&logger, &["Database", "Network", "Storage"]);

    assert_eq!(*seen.lock().unwrap(), ["Database", "Storage"]);
}

#[test]
fn disable_all_then_enable_one() {
    let (logger, seen) = collecting();

    logger.disable_all_tags();
    emit_all(&logger, &["Database", "Network"]);
    assert!(seen.lock().unwrap().is_empty());

    logger.enable_tag("Network");
    emit_all(&logger, &["Database", "Network"]);
    assert_eq!(*seen.lock().unwrap(), ["Network"]);

    logger.enable_all_tags();
    assert_eq!(logger.filter_mode(), FilterMode::AllowAll);
    emit_all(&logger, &["Database"]);
    assert_eq!(*seen.lock().unwrap(), ["Network", "Database"]);
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Enable,
    Disable,
    EnableAll,
    DisableAll,
    Clear,
}

/// A plain reimplementation of the tag filter rules.
#[derive(Debug, Default)]
struct Model {
    mode: FilterMode,
    entries: BTreeSet<String>,
}

impl Model {
    fn insert(&mut self, tag: &str) {
        if self.entries.len() < MAX_TAG_FILTERS {
            self.entries.insert(tag.to_string());
        }
    }

    fn apply(&mut self, op: Op, tag: &str) {
        match (op, self.mode) {
            (Op::Enable, FilterMode::AllowAll) => {
                self.mode = FilterMode::Whitelist;
                self.insert(tag);
            }
            (Op::Enable, FilterMode::Whitelist) => self.insert(tag),
            (Op::Enable, FilterMode::Blacklist) => {
                self.entries.remove(tag);
            }
            (Op::Disable, FilterMode::AllowAll) => {
                self.mode = FilterMode::Blacklist;
                self.insert(tag);
            }
            (Op::Disable, FilterMode::Blacklist) => self.insert(tag),
            (Op::Disable, FilterMode::Whitelist) => {
                self.entries.remove(tag);
            }
            (Op::EnableAll, _) => {
                self.mode = FilterMode::AllowAll;
                self.entries.clear();
            }
            (Op::DisableAll, _) => {
                self.mode = FilterMode::Whitelist;
                self.entries.clear();
            }
            (Op::Clear, _) => self.entries.clear(),
        }
    }

    fn is_enabled(&self, tag: &str) -> bool {
        match self.mode {
            FilterMode::AllowAll => true,
            FilterMode::Whitelist => self.entries.contains(tag),
            FilterMode::Blacklist => !self.entries.contains(tag),
        }
    }
}

#[test]
fn random_operations_match_the_model() {
    // more names than slots so saturation is reached
    let names = (0..MAX_TAG_FILTERS + 8)
        .map(|i| format!("Tag{i}"))
        .collect::<Vec<_>>();
    let ops = [Op::Enable, Op::Disable, Op::EnableAll, Op::DisableAll, Op::Clear];
    let weights = [40, 40, 3, 3, 2];

    let mut rng = rand::rng();
    for _ in 0..50 {
        let logger = Logger::default();
        let mut model = Model::default();

        for _ in 0..200 {
            let pick = rng.random_range(0..weights.iter().sum::<u32>());
            let mut acc = 0;
            let op = ops
                .iter()
                .zip(weights)
                .find(|(_, w)| {
                    acc += w;
                    pick < acc
                })
                .map(|(op, _)| *op)
                .unwrap();
            let tag = names.choose(&mut rng).unwrap();

            model.apply(op, tag);
            match op {
                Op::Enable => {
                    logger.enable_tag(tag);
                }
                Op::Disable => {
                    logger.disable_tag(tag);
                }
                Op::EnableAll => logger.enable_all_tags(),
                Op::DisableAll => logger.disable_all_tags(),
                Op::Clear => logger.clear_tag_filters(),
            }

            assert_eq!(logger.filter_mode(), model.mode, "after {op:?} {tag}");
            for name in &names {
                assert_eq!(
                    logger.is_tag_enabled(name),
                    model.is_enabled(name),
                    "after {op:?} {tag}: {name}"
                );
            }
        }
    }
}

#[test]
fn saturation_is_reported() {
    let logger = Logger::default();
    for i in 0..MAX_TAG_FILTERS {
        assert_eq!(logger.enable_tag(&format!("Tag{i}")), Outcome::Inserted);
    }

    let outcome = logger.enable_tag("OneTooMany");
    assert!(outcome.is_saturated());
    assert!(!logger.is_tag_enabled("OneTooMany"));

    // freeing a slot makes room again
    assert_eq!(logger.disable_tag("Tag0"), Outcome::Removed);
    assert_eq!(logger.enable_tag("OneTooMany"), Outcome::Inserted);
    assert!(logger.is_tag_enabled("OneTooMany"));
}
