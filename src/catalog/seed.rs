//! The cities the service starts with.

use crate::model::{City, PointOfInterest};

pub fn default_cities() -> Vec<City> {
    vec![
        City::new(1, "New York City", "The one with that big park.").with_points_of_interest([
            PointOfInterest::new(1, "Central Park", Some("The most visited urban park in the United States.")),
            PointOfInterest::new(2, "Empire State Building", Some("A 102-story skyscraper located in Midtown Manhattan.")),
        ]),
        City::new(2, "Antwerp", "The one with the cathedral that was never really finished.")
            .with_points_of_interest([
                PointOfInterest::new(3, "Cathedral of Our Lady", Some("A Gothic style cathedral, conceived by architects Jan and Pieter Appelmans.")),
                PointOfInterest::new(4, "Antwerp Central Station", Some("The finest example of railway architecture in Belgium.")),
            ]),
        City::new(3, "Paris", "The one with that big tower.").with_points_of_interest([
            PointOfInterest::new(5, "Eiffel Tower", Some("A wrought iron lattice tower on the Champ de Mars, named after engineer Gustave Eiffel.")),
            PointOfInterest::new(6, "The Louvre", Some("The world's largest museum.")),
        ]),
    ]
}
