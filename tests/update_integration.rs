//! End-to-end runs of the updater against a real directory vault.

mod support;

use chrono::NaiveDate;
use support::TestVault;

use prio::config::Config;
use prio::output::Notifier;
use prio::update::Updater;
use prio::vault::DirVault;

struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str) {}
}

fn run_on(vault: &TestVault, today: NaiveDate) {
    let config = Config::load_from_vault(vault.path());
    let dir = DirVault::new(vault.path().to_path_buf()).expect("vault");
    Updater::new(&dir, &SilentNotifier, &config)
        .run(today)
        .expect("run");
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn daily_run_ages_and_counts_streaks_across_files() {
    let vault = TestVault::init();
    vault.write_file(
        "ToDo Home.md",
        "# Home\n\
         - [ ] Pay rent [🎯:: 5] [⏳:: 2024-03-01]\n\
         \t- start_prio:: 10\n\
         \t- created:: 2024-01-01\n\
         unrelated prose stays put\n",
    );
    vault.write_file(
        "ToDo Habits.md",
        "- [x] Gym 🔁 ✅ 2024-01-03\n\
         \t- streak:: 3\n\
         \t- streak_start:: 2024-01-01\n",
    );

    run_on(&vault, date(2024, 1, 4));

    assert_eq!(
        vault.read_file("ToDo Home.md"),
        "# Home\n\
         - [ ] Pay rent [🎯:: 7] [⏳:: 2024-03-01]\n\
         \t- start_prio:: 10\n\
         \t- created:: 2024-01-01\n\
         unrelated prose stays put\n"
    );
    assert_eq!(
        vault.read_file("ToDo Habits.md"),
        "- [ ] Gym 🔁\n\
         \t- streak:: 4\n\
         \t- streak_start:: 2024-01-01\n"
    );
}

#[test]
fn missed_day_resets_streak() {
    let vault = TestVault::init();
    // last_done = 2024-01-04; running on the 7th means the 5th and 6th were missed
    vault.write_file(
        "ToDo.md",
        "- [ ] Meditate 🔁\n\
         \t- streak:: 4\n\
         \t- streak_start:: 2024-01-01\n",
    );

    run_on(&vault, date(2024, 1, 7));

    assert_eq!(
        vault.read_file("ToDo.md"),
        "- [ ] Meditate 🔁\n\
         \t- streak:: 0\n\
         \t- streak_start:: 2024-01-07\n"
    );
}

#[test]
fn weekly_schedule_overrides_deadline_on_shared_file() {
    let vault = TestVault::init();
    // 2024-01-02 is a Tuesday: off schedule, so the weekly task goes pending
    // while the deadline task on the same file still ages.
    vault.write_file(
        "ToDo.md",
        "- [ ] Water plants [🎯:: 1] [⏳:: 2024-01-03] 🔁\n\
         \t- daysOfWeek:: W,S,U\n\
         - [ ] Taxes [🎯:: /] [⏳:: 2024-01-02]\n",
    );

    run_on(&vault, date(2024, 1, 2));

    assert_eq!(
        vault.read_file("ToDo.md"),
        "- [ ] Water plants [🎯:: /] [⏳:: 2024-01-03] 🔁\n\
         \t- daysOfWeek:: W,S,U\n\
         - [ ] Taxes [🎯:: 1] [⏳:: 2024-01-02]\n"
    );
}

#[test]
fn streak_pass_reparses_lines_the_aging_pass_rewrote() {
    let vault = TestVault::init();
    // Wednesday: aging sets the weekly task active, then the streak pass
    // re-reads the rewritten file, counts yesterday's completion, and
    // reopens the checkbox.
    vault.write_file(
        "ToDo.md",
        "- [x] Gym [🎯:: /] 🔁 ✅ 2024-01-02\n\
         \t- daysOfWeek:: W,S,U\n\
         \t- streak:: 2\n\
         \t- streak_start:: 2024-01-01\n",
    );

    run_on(&vault, date(2024, 1, 3));

    assert_eq!(
        vault.read_file("ToDo.md"),
        "- [ ] Gym [🎯:: 1] 🔁\n\
         \t- daysOfWeek:: W,S,U\n\
         \t- streak:: 3\n\
         \t- streak_start:: 2024-01-01\n"
    );
}

#[test]
fn second_run_on_same_day_changes_nothing() {
    let vault = TestVault::init();
    vault.write_file(
        "ToDo.md",
        "- [ ] Task [🎯:: 5] [⏳:: 2024-03-01]\n\
         \t- start_prio:: 10\n\
         \t- created:: 2024-01-01\n\
         - [x] Gym 🔁 ✅ 2024-01-03\n\
         \t- streak:: 3\n\
         \t- streak_start:: 2024-01-01\n",
    );

    run_on(&vault, date(2024, 1, 4));
    let after_first = vault.read_file("ToDo.md");

    run_on(&vault, date(2024, 1, 4));
    assert_eq!(vault.read_file("ToDo.md"), after_first);
}

#[test]
fn non_candidate_files_are_never_touched() {
    let vault = TestVault::init();
    let original = "- [ ] Task [🎯:: /] [⏳:: 2020-01-01]\n";
    vault.write_file("Scratch.md", original);

    run_on(&vault, date(2024, 1, 4));

    assert_eq!(vault.read_file("Scratch.md"), original);
}

#[test]
fn configured_prefix_selects_other_files() {
    let vault = TestVault::init();
    vault.write_config("[files]\nprefix = \"Tasks\"\n");
    vault.write_file("Tasks Today.md", "- [ ] T [🎯:: /] [⏳:: 2024-01-01]\n");
    vault.write_file("ToDo.md", "- [ ] T [🎯:: /] [⏳:: 2024-01-01]\n");

    run_on(&vault, date(2024, 1, 2));

    assert!(vault.read_file("Tasks Today.md").contains("[🎯:: 1]"));
    assert!(vault.read_file("ToDo.md").contains("[🎯:: /]"));
}
