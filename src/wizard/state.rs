use serde::Serialize;

/// Home configuration sizes offered on step one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Floorplan {
    OneBhk,
    TwoBhk,
    ThreeBhk,
    ThreePlusBhk,
}

impl Floorplan {
    pub const ALL: [Floorplan; 4] = [
        Floorplan::OneBhk,
        Floorplan::TwoBhk,
        Floorplan::ThreeBhk,
        Floorplan::ThreePlusBhk,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Floorplan::OneBhk => "1 BHK",
            Floorplan::TwoBhk => "2 BHK",
            Floorplan::ThreeBhk => "3 BHK",
            Floorplan::ThreePlusBhk => "3+ BHK",
        }
    }
}

/// What the customer wants the interiors for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Purpose {
    MoveIn,
    RentOut,
    Renovate,
}

impl Purpose {
    pub const ALL: [Purpose; 3] = [Purpose::MoveIn, Purpose::RentOut, Purpose::Renovate];

    pub fn label(self) -> &'static str {
        match self {
            Purpose::MoveIn => "Move In",
            Purpose::RentOut => "Rent Out",
            Purpose::Renovate => "Renovate",
        }
    }
}

/// The countable work categories on step two. The modular kitchen is a
/// plain on/off choice and lives directly on [`Requirements`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuantityItem {
    Wardrobe,
    Entertainment,
    Study,
    Crockery,
}

impl QuantityItem {
    pub const ALL: [QuantityItem; 4] = [
        QuantityItem::Wardrobe,
        QuantityItem::Entertainment,
        QuantityItem::Study,
        QuantityItem::Crockery,
    ];

    /// Row label shown next to the stepper controls.
    pub fn label(self) -> &'static str {
        match self {
            QuantityItem::Wardrobe => "Wardrobe",
            QuantityItem::Entertainment => "Entertainment",
            QuantityItem::Study => "Study unit",
            QuantityItem::Crockery => "Crockery unit",
        }
    }

    fn summary_label(self) -> &'static str {
        match self {
            QuantityItem::Wardrobe => "Wardrobes",
            QuantityItem::Entertainment => "Entertainment Units",
            QuantityItem::Study => "Study Units",
            QuantityItem::Crockery => "Crockery Units",
        }
    }
}

/// Itemized interior-work selections. Quantities never go below zero;
/// decrementing an empty slot is a no-op.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Requirements {
    pub kitchen: bool,
    wardrobe: u32,
    entertainment: u32,
    study: u32,
    crockery: u32,
}

impl Default for Requirements {
    fn default() -> Self {
        Requirements {
            kitchen: true,
            wardrobe: 1,
            entertainment: 1,
            study: 1,
            crockery: 1,
        }
    }
}

impl Requirements {
    pub fn quantity(&self, item: QuantityItem) -> u32 {
        match item {
            QuantityItem::Wardrobe => self.wardrobe,
            QuantityItem::Entertainment => self.entertainment,
            QuantityItem::Study => self.study,
            QuantityItem::Crockery => self.crockery,
        }
    }

    fn slot(&mut self, item: QuantityItem) -> &mut u32 {
        match item {
            QuantityItem::Wardrobe => &mut self.wardrobe,
            QuantityItem::Entertainment => &mut self.entertainment,
            QuantityItem::Study => &mut self.study,
            QuantityItem::Crockery => &mut self.crockery,
        }
    }

    pub fn increment(&mut self, item: QuantityItem) {
        *self.slot(item) += 1;
    }

    pub fn decrement(&mut self, item: QuantityItem) {
        let slot = self.slot(item);
        *slot = slot.saturating_sub(1);
    }

    pub fn set_kitchen(&mut self, on: bool) {
        self.kitchen = on;
    }

    /// Human-readable summary for the lead email. Kitchen first when chosen,
    /// then one line per non-zero quantity in fixed order.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.kitchen {
            parts.push("Modular Kitchen: Yes".to_string());
        }
        for item in QuantityItem::ALL {
            let n = self.quantity(item);
            if n > 0 {
                parts.push(format!("{}: {}", item.summary_label(), n));
            }
        }
        parts.join("\n")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    Selection,
    Requirements,
    Contact,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Selection => 1,
            Step::Requirements => 2,
            Step::Contact => 3,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Submission {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// What goes out to the email relay, all fields preformatted.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Lead {
    pub name: String,
    pub mobile: String,
    pub floorplan: String,
    pub purpose: String,
    pub requirements: String,
}

/// The three-step quote wizard. Pure state; the popup component owns one of
/// these and maps DOM events onto its transitions.
#[derive(Clone, PartialEq, Debug)]
pub struct WizardState {
    pub step: Step,
    pub floorplan: Option<Floorplan>,
    pub purpose: Option<Purpose>,
    pub requirements: Requirements,
    pub name: String,
    pub mobile: String,
    pub submission: Submission,
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState {
            step: Step::Selection,
            floorplan: None,
            purpose: None,
            requirements: Requirements::default(),
            name: String::new(),
            mobile: String::new(),
            submission: Submission::Idle,
        }
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_floorplan(&mut self, floorplan: Floorplan) {
        if self.step == Step::Selection {
            self.floorplan = Some(floorplan);
        }
    }

    pub fn select_purpose(&mut self, purpose: Purpose) {
        if self.step == Step::Selection {
            self.purpose = Some(purpose);
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn set_mobile(&mut self, mobile: String) {
        self.mobile = mobile;
    }

    fn selection_complete(&self) -> bool {
        self.floorplan.is_some() && self.purpose.is_some()
    }

    /// Step-three guard: a name and a plausible mobile number.
    pub fn contact_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.mobile.trim().len() >= 8
    }

    /// Whether the forward button should be live on the current step. Step
    /// two has no required fields; an empty selection is still a valid lead.
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::Selection => self.selection_complete(),
            Step::Requirements => true,
            Step::Contact => false,
        }
    }

    /// Move forward one step. Returns false (and changes nothing) when the
    /// current step's guard is not satisfied.
    pub fn advance(&mut self) -> bool {
        match self.step {
            Step::Selection if self.selection_complete() => {
                self.step = Step::Requirements;
                true
            }
            Step::Requirements => {
                self.step = Step::Contact;
                true
            }
            _ => false,
        }
    }

    /// Move back one step; no-op on the first step.
    pub fn retreat(&mut self) {
        self.step = match self.step {
            Step::Selection => Step::Selection,
            Step::Requirements => Step::Selection,
            Step::Contact => Step::Requirements,
        };
    }

    /// Try to start the submission. Returns the lead to dispatch, or `None`
    /// when the contact guard fails or a send is already in flight — at most
    /// one request may be outstanding.
    pub fn begin_submit(&mut self) -> Option<Lead> {
        if self.step != Step::Contact
            || self.submission == Submission::Sending
            || !self.contact_complete()
        {
            return None;
        }
        // Both are guaranteed set: step three is unreachable without them.
        let (floorplan, purpose) = match (self.floorplan, self.purpose) {
            (Some(f), Some(p)) => (f, p),
            _ => return None,
        };
        self.submission = Submission::Sending;
        Some(Lead {
            name: self.name.clone(),
            mobile: self.mobile.clone(),
            floorplan: floorplan.label().to_string(),
            purpose: purpose.label().to_string(),
            requirements: self.requirements.summary(),
        })
    }

    pub fn submit_succeeded(&mut self) {
        self.submission = Submission::Succeeded;
    }

    pub fn submit_failed(&mut self) {
        self.submission = Submission::Failed;
    }

    /// Back to an actionable submit button after a reported failure.
    pub fn clear_submission(&mut self) {
        self.submission = Submission::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_to_contact() -> WizardState {
        let mut wizard = WizardState::new();
        wizard.select_floorplan(Floorplan::TwoBhk);
        wizard.select_purpose(Purpose::Renovate);
        assert!(wizard.advance());
        assert!(wizard.advance());
        wizard
    }

    #[test]
    fn quantities_clamp_at_zero() {
        let mut req = Requirements::default();
        for item in QuantityItem::ALL {
            for _ in 0..5 {
                req.decrement(item);
            }
            assert_eq!(req.quantity(item), 0);
            req.increment(item);
            assert_eq!(req.quantity(item), 1);
        }
    }

    #[test]
    fn advance_blocked_until_selection_complete() {
        let mut wizard = WizardState::new();
        assert!(!wizard.advance());
        assert_eq!(wizard.step, Step::Selection);

        wizard.select_floorplan(Floorplan::OneBhk);
        assert!(!wizard.advance());
        assert_eq!(wizard.step, Step::Selection);

        wizard.select_purpose(Purpose::MoveIn);
        assert!(wizard.advance());
        assert_eq!(wizard.step, Step::Requirements);
    }

    #[test]
    fn requirements_step_advances_unconditionally() {
        let mut wizard = WizardState::new();
        wizard.select_floorplan(Floorplan::OneBhk);
        wizard.select_purpose(Purpose::RentOut);
        wizard.advance();
        for item in QuantityItem::ALL {
            wizard.requirements.decrement(item);
        }
        wizard.requirements.set_kitchen(false);
        assert!(wizard.advance());
        assert_eq!(wizard.step, Step::Contact);
    }

    #[test]
    fn retreat_is_noop_on_first_step() {
        let mut wizard = WizardState::new();
        wizard.retreat();
        assert_eq!(wizard.step, Step::Selection);

        let mut wizard = filled_to_contact();
        wizard.retreat();
        assert_eq!(wizard.step, Step::Requirements);
        wizard.retreat();
        assert_eq!(wizard.step, Step::Selection);
    }

    #[test]
    fn second_submit_while_sending_is_suppressed() {
        let mut wizard = filled_to_contact();
        wizard.set_name("Priya".into());
        wizard.set_mobile("9876543210".into());

        assert!(wizard.begin_submit().is_some());
        assert_eq!(wizard.submission, Submission::Sending);
        assert!(wizard.begin_submit().is_none());
        assert_eq!(wizard.submission, Submission::Sending);
    }

    #[test]
    fn summary_omits_zero_lines_and_keeps_order() {
        let mut req = Requirements::default();
        req.increment(QuantityItem::Wardrobe); // 2
        req.decrement(QuantityItem::Entertainment); // 0
        req.decrement(QuantityItem::Crockery); // 0
        assert_eq!(
            req.summary(),
            "Modular Kitchen: Yes\nWardrobes: 2\nStudy Units: 1"
        );
    }

    #[test]
    fn summary_without_kitchen_starts_with_first_quantity() {
        let mut req = Requirements::default();
        req.set_kitchen(false);
        assert_eq!(
            req.summary(),
            "Wardrobes: 1\nEntertainment Units: 1\nStudy Units: 1\nCrockery Units: 1"
        );
    }

    #[test]
    fn short_mobile_is_rejected_and_state_kept() {
        let mut wizard = filled_to_contact();
        wizard.requirements.decrement(QuantityItem::Entertainment);
        wizard.set_name("A".into());
        wizard.set_mobile("123".into());

        assert!(wizard.begin_submit().is_none());
        assert_eq!(wizard.step, Step::Contact);
        assert_eq!(wizard.submission, Submission::Idle);
    }

    #[test]
    fn accepted_submission_carries_formatted_lead() {
        let mut wizard = filled_to_contact();
        wizard.requirements.decrement(QuantityItem::Entertainment);
        wizard.set_name("A".into());
        wizard.set_mobile("9876543210".into());

        let lead = wizard.begin_submit().expect("guard satisfied");
        assert_eq!(lead.floorplan, "2 BHK");
        assert_eq!(lead.purpose, "Renovate");
        assert_eq!(
            lead.requirements,
            "Modular Kitchen: Yes\nWardrobes: 1\nStudy Units: 1\nCrockery Units: 1"
        );

        wizard.submit_succeeded();
        assert_eq!(wizard.submission, Submission::Succeeded);
    }

    #[test]
    fn failure_resets_to_an_actionable_state() {
        let mut wizard = filled_to_contact();
        wizard.set_name("Priya".into());
        wizard.set_mobile("98765432".into());

        assert!(wizard.begin_submit().is_some());
        wizard.submit_failed();
        assert_eq!(wizard.submission, Submission::Failed);
        wizard.clear_submission();

        // Nothing was lost; the user can simply resubmit.
        assert_eq!(wizard.step, Step::Contact);
        assert!(wizard.begin_submit().is_some());
    }

    #[test]
    fn reopening_yields_fresh_defaults() {
        let mut wizard = filled_to_contact();
        wizard.set_name("Priya".into());
        wizard.requirements.increment(QuantityItem::Study);

        // A dismissed wizard is simply replaced on the next open.
        let reopened = WizardState::new();
        assert_eq!(reopened.step, Step::Selection);
        assert_eq!(reopened.floorplan, None);
        assert_eq!(reopened.purpose, None);
        assert_eq!(reopened.requirements, Requirements::default());
        assert!(reopened.name.is_empty());
        assert_eq!(reopened.submission, Submission::Idle);
    }

    #[test]
    fn selection_only_mutates_on_step_one() {
        let mut wizard = filled_to_contact();
        wizard.select_floorplan(Floorplan::OneBhk);
        wizard.select_purpose(Purpose::MoveIn);
        assert_eq!(wizard.floorplan, Some(Floorplan::TwoBhk));
        assert_eq!(wizard.purpose, Some(Purpose::Renovate));
    }
}
