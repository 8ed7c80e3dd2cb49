/// One corpus document destined for the index.
#[derive(Clone, Copy, Debug)]
pub struct SeedDoc {
	pub id: &'static str,
	pub text: &'static str,
	pub domain: &'static str,
	pub clearance_min: i64,
	pub doc_id: &'static str,
	pub section: &'static str,
}

const fn doc(
	id: &'static str,
	text: &'static str,
	domain: &'static str,
	clearance_min: i64,
	doc_id: &'static str,
	section: &'static str,
) -> SeedDoc {
	SeedDoc { id, text, domain, clearance_min, doc_id, section }
}

/// The fixed demo corpus. Ids are stable so reseeding overwrites in place.
pub const CORPUS: [SeedDoc; 56] = [
	doc("fin-1", "Employees may claim travel expenses for approved trips.", "finance", 2, "finance-policy.pdf", "3.2"),
	doc("fin-2", "Airfare must be economy unless pre-approved by Finance.", "finance", 2, "finance-policy.pdf", "3.3"),
	doc("hr-1", "New hires must complete I-9 within three business days.", "hr", 1, "onboarding.md", "I-9"),
	doc("fin-3", "Hotel stays are reimbursable up to $180/night in Tier-1 cities and $130/night elsewhere; taxes and mandatory fees are included in the cap.", "finance", 2, "finance-policy.pdf", "3.5"),
	doc("fin-4", "Ground transportation should favor public transit and rideshare pool options when safe and practical.", "finance", 1, "t&e-policy.md", "4.1"),
	doc("fin-5", "Personal car mileage is reimbursed at the IRS standard rate; parking and tolls require itemized receipts.", "finance", 2, "t&e-policy.md", "4.2"),
	doc("fin-6", "Per-diem covers meals and incidentals only; alcohol is not reimbursable under any circumstances.", "finance", 1, "t&e-policy.md", "4.3"),
	doc("fin-7", "International travel must be booked at least 14 days in advance unless approved by the CFO.", "finance", 3, "finance-policy.pdf", "3.7"),
	doc("fin-8", "Conference registration fees are reimbursable when pre-approved and directly related to the employee’s role.", "finance", 1, "training-and-events.md", "2.1"),
	doc("fin-9", "All corporate card transactions must be expensed within 15 calendar days of the statement close.", "finance", 2, "card-program.md", "1.2"),
	doc("fin-10", "Spend over $5,000 requires a purchase order and vendor onboarding through Procurement.", "finance", 2, "procurement.md", "PO-Thresholds"),
	doc("fin-11", "Three competitive quotes are required for purchases between $10,000 and $50,000 unless a sole-source justification is approved.", "finance", 3, "procurement.md", "Sourcing"),
	doc("fin-12", "Subscription software must be tied to an owner and a cost center; auto-renewals should be reviewed 30 days prior.", "finance", 2, "spend-ops.md", "SaaS"),
	doc("fin-13", "Expense reports missing receipts over $25 will be returned; repeated violations may result in card suspension.", "finance", 2, "t&e-policy.md", "4.4"),
	doc("fin-14", "Grants and customer-funded travel must bill actuals to the project code provided by FP&A.", "finance", 3, "finance-policy.pdf", "Project-Billing"),
	doc("fin-15", "Stipends for remote work equipment are capped at $400/year and must be purchased through approved vendors.", "finance", 1, "stipends.md", "Home-Office"),
	doc("fin-16", "Currency conversion fees on corporate cards are reimbursable; personal card conversions are not.", "finance", 2, "t&e-policy.md", "International"),
	doc("fin-17", "Airfare changes after ticketing require Finance approval unless due to airline-initiated changes.", "finance", 2, "travel-booking.md", "Changes"),
	doc("fin-18", "Team meals require a business purpose and attendee list; tips should not exceed 20% before tax.", "finance", 1, "t&e-policy.md", "Meals"),
	doc("fin-19", "Capital purchases (useful life > 1 year) must be coded to the fixed asset account and tagged for inventory.", "finance", 3, "accounting-manual.md", "Capex"),
	doc("fin-20", "Employees must use the preferred travel agency for booking to enable duty-of-care and negotiated rates.", "finance", 2, "travel-booking.md", "Preferred-Agency"),
	doc("eng-1", "All production deploys require an approved change ticket linked to the relevant issue and a rollback plan.", "engineering", 2, "eng-runbook.md", "Deploys"),
	doc("eng-2", "Services must expose a /healthz endpoint that returns 200 OK when dependencies are healthy.", "engineering", 1, "service-standards.md", "Healthchecks"),
	doc("eng-3", "Critical alerts page on-call within 2 minutes and must have actionable runbook steps.", "engineering", 2, "oncall.md", "Alerting"),
	doc("eng-4", "Every microservice must publish an OpenAPI spec to the internal registry and keep it versioned.", "engineering", 2, "api-governance.md", "Spec-Registry"),
	doc("eng-5", "Pull requests require at least one approving review and all required checks passing; self-merges are disallowed.", "engineering", 1, "code-review.md", "PR-Policy"),
	doc("eng-6", "Secrets must be stored in the centralized vault; environment variables should reference secret paths, not plaintext.", "engineering", 3, "security-std.md", "Secrets"),
	doc("eng-7", "Datastores must define RPO ≤ 24h and RTO ≤ 4h, with quarterly restore tests documented.", "engineering", 3, "resilience.md", "Backups"),
	doc("eng-8", "Breaking API changes require a deprecation notice and a minimum 2 minor releases of overlap.", "engineering", 2, "api-governance.md", "Versioning"),
	doc("eng-9", "Production data may not be copied to developer laptops; use masked datasets or synthetic fixtures.", "engineering", 3, "data-handling.md", "Prod-Data"),
	doc("eng-10", "Infrastructure changes must be represented as code and peer-reviewed before apply.", "engineering", 2, "iac-guidelines.md", "Change-Control"),
	doc("eng-11", "Services must emit structured logs in JSON with request IDs and user IDs when available.", "engineering", 1, "observability.md", "Logging"),
	doc("eng-12", "SLOs: target availability ≥ 99.9% for external APIs; error budgets are reviewed in postmortems.", "engineering", 2, "sre-playbook.md", "SLOs"),
	doc("eng-13", "All containers must run as non-root and have a read-only root filesystem unless justified.", "engineering", 3, "security-std.md", "Containers"),
	doc("eng-14", "Dependencies must be scanned for known CVEs weekly; high severity issues fixed within 7 days.", "engineering", 3, "security-std.md", "Vulnerability-Scanning"),
	doc("eng-15", "Feature flags must default to safe values and be auto-removed within two releases.", "engineering", 1, "release-engineering.md", "Feature-Flags"),
	doc("eng-16", "Schema migrations must be backwards compatible for at least one deployment cycle.", "engineering", 2, "database-guidelines.md", "Migrations"),
	doc("eng-17", "PII fields must be tagged in the schema and encrypted at rest; access is logged and reviewed monthly.", "engineering", 3, "data-handling.md", "PII"),
	doc("eng-18", "Incident severity is determined by customer impact and SLA breach risk; SEV-1 requires exec comms within 30 min.", "engineering", 2, "incident-response.md", "Severity-Matrix"),
	doc("hr-2", "Employees accrue 1.5 vacation days per month; balances carry over up to 10 days into the next year.", "hr", 1, "benefits.md", "Vacation"),
	doc("hr-3", "New hires must complete security and code-of-conduct training within 14 days of start.", "hr", 1, "onboarding.md", "Training"),
	doc("hr-4", "Remote work arrangements require manager approval and must comply with local labor laws.", "hr", 2, "work-arrangements.md", "Remote"),
	doc("hr-5", "Performance reviews occur biannually; calibration sessions are facilitated by HRBPs.", "hr", 2, "performance.md", "Review-Cycle"),
	doc("hr-6", "Expense reimbursements are paid on the next payroll after approval and audit.", "hr", 1, "payroll.md", "Reimbursements"),
	doc("hr-7", "Company holidays are published annually; essential operations may require coverage with premium pay.", "hr", 1, "time-off.md", "Holidays"),
	doc("hr-8", "Parental leave provides 12 weeks paid for birthing parents and 8 weeks paid for non-birthing parents.", "hr", 2, "leave.md", "Parental"),
	doc("hr-9", "Internal job postings are visible for at least 5 business days before external posting.", "hr", 1, "talent.md", "Internal-Mobility"),
	doc("hr-10", "Offer letters must use the standard template and be approved by Compensation for band alignment.", "hr", 3, "hiring.md", "Offers"),
	doc("hr-11", "All contractors require a signed MSA and a statement of work with clear deliverables and term.", "hr", 2, "vendor-labor.md", "Contractors"),
	doc("hr-12", "Workplace concerns can be reported confidentially via the ethics hotline; retaliation is prohibited.", "hr", 1, "ethics.md", "Reporting"),
	doc("hr-13", "Annual harassment prevention training is mandatory for all people managers.", "hr", 2, "training.md", "Harassment"),
	doc("hr-14", "Equity grants are subject to board approval and follow the company’s standard vesting schedule.", "hr", 3, "compensation.md", "Equity"),
	doc("hr-15", "Sick leave is separate from vacation and should be used for personal or family health needs.", "hr", 1, "leave.md", "Sick-Leave"),
	doc("hr-16", "Exit interviews are scheduled during the notice period and insights are anonymized quarterly.", "hr", 2, "offboarding.md", "Exit-Interviews"),
	doc("hr-17", "Badge access is terminated at end of employment date; equipment must be returned within 5 business days.", "hr", 2, "offboarding.md", "Access"),
	doc("hr-18", "Reasonable accommodations are available through HR upon request with supporting documentation.", "hr", 2, "policies.md", "Accommodation"),
];
