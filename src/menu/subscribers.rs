use super::{MenuEvent, Observer};
use crate::components::{ComponentExt, Divider, Receipt, Text};

/// Numbered list of messages under a title.
fn message_list(title: String, messages: &[String], empty: &str) -> String {
    let mut receipt = Receipt::new().child(Text::new(title));
    if messages.is_empty() {
        receipt.push(Text::new(empty));
    }
    for (i, message) in messages.iter().enumerate() {
        receipt.push(Text::new(format!("{}. {}", i + 1, message)));
    }
    receipt.push(Divider::equals());
    receipt.render()
}

/// A customer who follows one or more menus.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    phone: String,
    notifications: Vec<String>,
    reactions: Vec<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            notifications: Vec::new(),
            reactions: Vec::new(),
        }
    }

    /// What a customer says on hearing `event`.
    pub fn reaction(event: &MenuEvent) -> &'static str {
        match event {
            MenuEvent::PizzaAdded { .. } => "Exciting!",
            MenuEvent::SpecialAdded { .. } => "I should order soon!",
            MenuEvent::PizzaRemoved { .. } | MenuEvent::SpecialEnded { .. } => "Oh no!",
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// Every message received, oldest first.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Every reaction, formatted as `Name says: 'Reaction'`.
    pub fn reactions(&self) -> &[String] {
        &self.reactions
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
        self.reactions.clear();
    }

    pub fn display_notifications(&self) -> String {
        message_list(
            format!("=== Notifications for {} ===", self.name),
            &self.notifications,
            "No notifications.",
        )
    }
}

impl Observer for Customer {
    fn update(&mut self, event: &MenuEvent) {
        let message = event.to_string();
        log::debug!("Customer {} received: {}", self.name, message);
        if !self.phone.is_empty() {
            log::debug!("SMS sent to {}", self.phone);
        }
        self.notifications.push(message);
        self.reactions
            .push(format!("{} says: '{}'", self.name, Self::reaction(event)));
    }
}

const ADDED_STEPS: &[&str] = &[
    "Added to online menu with photos and descriptions",
    "Updated homepage banner",
];

const SPECIAL_STEPS: &[&str] = &[
    "Featured on specials page",
    "Added popup notification for visitors",
    "Social media posts scheduled",
];

const REMOVED_STEPS: &[&str] = &["Removed from online menu", "Updated availability status"];

/// A website that mirrors menu changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Website {
    name: String,
    url: String,
    updates: Vec<String>,
    published: Vec<String>,
}

impl Website {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            updates: Vec::new(),
            published: Vec::new(),
        }
    }

    /// Site changes made for `event`, before publishing.
    pub fn publishing_steps(event: &MenuEvent) -> &'static [&'static str] {
        match event {
            MenuEvent::PizzaAdded { .. } => ADDED_STEPS,
            MenuEvent::SpecialAdded { .. } => SPECIAL_STEPS,
            MenuEvent::PizzaRemoved { .. } | MenuEvent::SpecialEnded { .. } => REMOVED_STEPS,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Every message received, oldest first.
    pub fn updates(&self) -> &[String] {
        &self.updates
    }

    /// Every step carried out, across all updates.
    pub fn published(&self) -> &[String] {
        &self.published
    }

    pub fn clear_updates(&mut self) {
        self.updates.clear();
        self.published.clear();
    }

    pub fn display_updates(&self) -> String {
        message_list(
            format!("=== Website Updates for {} ===", self.name),
            &self.updates,
            "No recent updates.",
        )
    }

    fn publish(&mut self) {
        self.published.push("Published to website backend database".to_string());
        self.published.push("Cache cleared for updated pages".to_string());
    }
}

impl Observer for Website {
    fn update(&mut self, event: &MenuEvent) {
        let message = event.to_string();
        log::debug!("Website {} updated at {}: {}", self.name, self.url, message);
        self.updates.push(message);
        self.published
            .extend(Self::publishing_steps(event).iter().map(|s| s.to_string()));
        self.publish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added() -> MenuEvent {
        MenuEvent::PizzaAdded {
            name: "Pepperoni".into(),
            price: 50.0,
            currency: "R".into(),
        }
    }

    fn special() -> MenuEvent {
        MenuEvent::SpecialAdded {
            name: "Pepperoni".into(),
            description: "Half price".into(),
            price: 50.0,
            currency: "R".into(),
        }
    }

    fn ended() -> MenuEvent {
        MenuEvent::SpecialEnded {
            name: "Pepperoni".into(),
            description: "Half price".into(),
        }
    }

    #[test]
    fn test_customer_reactions() {
        let mut ann = Customer::new("Ann", "555-0100");
        ann.update(&added());
        ann.update(&special());
        ann.update(&ended());

        assert_eq!(ann.notifications().len(), 3);
        assert_eq!(
            ann.reactions(),
            [
                "Ann says: 'Exciting!'",
                "Ann says: 'I should order soon!'",
                "Ann says: 'Oh no!'",
            ]
        );

        ann.clear_notifications();
        assert!(ann.notifications().is_empty());
        assert!(ann.display_notifications().contains("No notifications."));
    }

    #[test]
    fn test_customer_phone() {
        let mut ann = Customer::new("Ann", "");
        assert_eq!(ann.phone(), "");
        ann.set_phone("555-0199");
        assert_eq!(ann.phone(), "555-0199");
        assert_eq!(ann.name(), "Ann");
    }

    #[test]
    fn test_website_publishing() {
        let mut site = Website::new("Romeo's", "https://romeos.example");
        site.update(&special());

        assert_eq!(site.updates().len(), 1);
        assert_eq!(
            site.published(),
            [
                "Featured on specials page",
                "Added popup notification for visitors",
                "Social media posts scheduled",
                "Published to website backend database",
                "Cache cleared for updated pages",
            ]
        );
        assert!(site.display_updates().contains("1. New special offer: Pepperoni"));
    }

    #[test]
    fn test_removal_steps() {
        let removed = MenuEvent::PizzaRemoved {
            name: "Pepperoni".into(),
        };
        assert_eq!(Website::publishing_steps(&removed), Website::publishing_steps(&ended()));
        assert_eq!(Website::publishing_steps(&added()).len(), 2);
    }
}
