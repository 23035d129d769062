use chrono::{Datelike, NaiveDate};

use crate::model::certification::Certification;

/// Records shown by the list view, with client-side search and summary counts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CertificationList {
    records: Vec<Certification>,
}

/// Numbers shown in the two summary cards above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListSummary {
    pub total: usize,
    /// Records whose entry date falls in the current calendar month.
    pub this_month: usize,
}

impl CertificationList {
    pub fn new(records: Vec<Certification>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Certification] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring search over employee name, NIK, certification
    /// name and category. A blank query matches everything.
    pub fn filtered(&self, query: &str) -> Vec<&Certification> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|record| {
                [
                    record.employee_name(),
                    record.employee_nik(),
                    Some(record.cert_name.as_str()),
                    Some(record.cert_type.as_str()),
                ]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn summary(&self, today: NaiveDate) -> ListSummary {
        let this_month = self
            .records
            .iter()
            .filter_map(|r| r.entry_date)
            .filter(|d| d.year() == today.year() && d.month() == today.month())
            .count();
        ListSummary {
            total: self.records.len(),
            this_month,
        }
    }

    /// Drops a deleted record locally. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Replaces the record with the same id, or puts a new one at the top.
    pub fn upsert(&mut self, record: Certification) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.insert(0, record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::account::AccountRef;

    fn record(id: &str, name: &str, nik: &str, cert: &str, kind: &str, entry: NaiveDate) -> Certification {
        Certification {
            id: id.into(),
            account_id: format!("acc-{id}"),
            entry_date: Some(entry),
            cert_type: kind.into(),
            cert_name: cert.into(),
            cert_date: entry,
            file_id: None,
            notes: None,
            account: Some(AccountRef {
                full_name: Some(name.into()),
                internal_nik: Some(nik.into()),
            }),
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> CertificationList {
        CertificationList::new(vec![
            record("1", "Budi Santoso", "HR-001", "First Aid Level 1", "Safety", ymd(2026, 10, 2)),
            record("2", "Siti Aminah", "HR-002", "TOEFL ITP", "Language", ymd(2026, 9, 30)),
            record("3", "Agus Wirawan", "OPS-113", "Forklift Operator", "Safety", ymd(2025, 10, 5)),
        ])
    }

    fn ids(records: Vec<&Certification>) -> Vec<&str> {
        records.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(ids(sample().filtered("   ")), vec!["1", "2", "3"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let list = sample();
        assert_eq!(ids(list.filtered("siti")), vec!["2"]);
        assert_eq!(ids(list.filtered("ops-1")), vec!["3"]);
        assert_eq!(ids(list.filtered("FORKLIFT")), vec!["3"]);
        assert_eq!(ids(list.filtered("safety")), vec!["1", "3"]);
        assert!(list.filtered("nothing like this").is_empty());
    }

    #[test]
    fn search_tolerates_missing_join() {
        let mut lone = record("9", "x", "y", "CPR", "Medical", ymd(2026, 1, 1));
        lone.account = None;
        let list = CertificationList::new(vec![lone]);
        assert_eq!(ids(list.filtered("cpr")), vec!["9"]);
        assert!(list.filtered("x").is_empty());
    }

    #[test]
    fn summary_counts_current_calendar_month_only() {
        let summary = sample().summary(ymd(2026, 10, 17));
        assert_eq!(summary, ListSummary { total: 3, this_month: 1 });
    }

    #[test]
    fn remove_drops_record_without_refetch() {
        let mut list = sample();
        assert!(list.remove("2"));
        assert_eq!(ids(list.filtered("")), vec!["1", "3"]);
        assert!(!list.remove("2"));
    }

    #[test]
    fn upsert_replaces_or_prepends() {
        let mut list = sample();
        let mut edited = list.records()[1].clone();
        edited.cert_name = "IELTS".into();
        list.upsert(edited);
        assert_eq!(list.records()[1].cert_name, "IELTS");

        list.upsert(record("4", "Rina", "HR-010", "CPR", "Medical", ymd(2026, 10, 17)));
        assert_eq!(list.records()[0].id, "4");
        assert_eq!(list.len(), 4);
    }
}
