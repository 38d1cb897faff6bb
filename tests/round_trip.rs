use wareki::{ERAS, Era, EraTable, GregorianDate, WarekiDate, WarekiError, YearStyle, from_wareki, to_wareki};

fn date(year: i32, month: u32, day: u32) -> GregorianDate {
    GregorianDate::new(year, month, day).unwrap()
}

/// Every day from the start of Meiji through the end of 2100.
fn supported_days() -> impl Iterator<Item = GregorianDate> {
    let last = date(2100, 12, 31);
    std::iter::successors(Some(ERAS[0].start()), move |d| d.succ().filter(|next| *next <= last))
}

#[test]
fn gregorian_to_wareki_round_trip() {
    let mut count = 0;
    for d in supported_days() {
        let (y, m, day) = d.as_tuple();
        let w = to_wareki(i32::from(y), u32::from(m), u32::from(day)).unwrap();
        let (era, era_year, month, day) = w.as_tuple();
        assert_eq!(from_wareki(era, era_year, month, day), Ok(d), "round trip failed for {d} ({w})");
        count += 1;
    }
    assert!(count > 80_000, "iterated only {count} days");
}

#[test]
fn wareki_to_gregorian_round_trip() {
    for record in &ERAS {
        let last_year = record.end().map_or(2100, |end| end.year()) - record.start().year() + 1;
        for era_year in 1..=u32::from(last_year) {
            for month in 1..=12 {
                for day in 1..=31 {
                    let Ok(d) = from_wareki(record.abbreviation(), era_year, month, day) else {
                        continue;
                    };
                    let w = to_wareki(i32::from(d.year()), u32::from(d.month()), u32::from(d.day())).unwrap();
                    assert_eq!(w.as_tuple(), (record.name(), era_year, month, day), "{d}");
                }
            }
        }
    }
}

#[test]
fn era_year_is_a_step_function_of_the_gregorian_year() {
    let mut previous: Option<(GregorianDate, WarekiDate)> = None;
    for d in supported_days() {
        let w = EraTable::STANDARD.date_to_wareki(d).unwrap();
        if let Some((prev_d, prev_w)) = previous {
            if prev_w.era() == w.era() {
                if prev_d.year() == d.year() {
                    assert_eq!(prev_w.era_year(), w.era_year(), "era-year changed mid-year at {d}");
                } else {
                    assert_eq!((d.month(), d.day()), (1, 1));
                    assert_eq!(prev_w.era_year() + 1, w.era_year(), "era-year did not step at {d}");
                }
            } else {
                assert!(prev_w.era() < w.era());
                assert_eq!(w.era_year(), 1, "new era {} must start at era-year 1", w.era());
            }
        }
        previous = Some((d, w));
    }
}

#[test]
fn era_boundaries() {
    for pair in ERAS.windows(2) {
        let (prior, next) = (&pair[0], &pair[1]);
        let start = next.start();
        let eve = start.pred().unwrap();

        let first = EraTable::STANDARD.date_to_wareki(start).unwrap();
        assert_eq!((first.era(), first.era_year()), (next.era(), 1));

        let last = EraTable::STANDARD.date_to_wareki(eve).unwrap();
        let expected_final_year = u32::from(eve.year() - prior.start().year()) + 1;
        assert_eq!((last.era(), last.era_year()), (prior.era(), expected_final_year));
    }
}

#[test]
fn documented_examples() {
    let w = to_wareki(2026, 2, 23).unwrap();
    assert_eq!((w.era_name(), w.era_year()), ("令和", 8));
    assert_eq!(w.to_string(), "令和8年");

    let w = to_wareki(1989, 1, 8).unwrap();
    assert_eq!((w.era_name(), w.era_year()), ("平成", 1));
    assert_eq!(w.short(YearStyle::Gannen).to_string(), "平成元年");

    assert!(matches!(
        to_wareki(1868, 1, 24),
        Err(WarekiError::OutOfSupportedRange { .. })
    ));
    assert!(
        to_wareki(1868, 1, 24)
            .unwrap_err()
            .to_string()
            .contains("Date is out of supported range")
    );

    for token in ["令和", "令", "r", "R"] {
        assert_eq!(from_wareki(token, 8, 2, 23), Ok(date(2026, 2, 23)));
    }
    assert_eq!(from_wareki("令和", 6, 2, 29), Ok(date(2024, 2, 29)));
    assert!(matches!(
        from_wareki("令和", 5, 2, 29),
        Err(WarekiError::InvalidDate(_))
    ));
    assert_eq!(Era::Reiwa.record().start(), date(2019, 5, 1));
}

#[test]
fn conversions_are_thread_safe() {
    fn assert_impl<T: Send + Sync>() {}
    assert_impl::<WarekiDate>();
    assert_impl::<GregorianDate>();
    assert_impl::<EraTable<'static>>();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let year = 2019 + i;
                to_wareki(year, 6, 1).map(|w| w.era_year())
            })
        })
        .collect();
    let years: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    assert_eq!(years, vec![1, 2, 3, 4]);
}
