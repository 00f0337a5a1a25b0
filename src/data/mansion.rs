//! The mansion map
//!
//! Rooms form a binary tree: every room may open onto a room to the left
//! and one to the right. The layout is fixed and built once per session.

use super::Direction;

/// A room of the mansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    clue: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: None,
            left: None,
            right: None,
        }
    }

    /// Leave a clue in this room. An empty clue means no clue.
    pub fn clue_text(mut self, clue: &str) -> Self {
        self.clue = (!clue.is_empty()).then(|| clue.to_string());
        self
    }

    pub fn left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    pub fn right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    /// Directions that lead somewhere, left first
    pub fn exits(&self) -> Vec<Direction> {
        [Direction::Left, Direction::Right]
            .into_iter()
            .filter(|d| self.child(*d).is_some())
            .collect()
    }
}

/// The whole map, owned for the duration of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mansion {
    root: Room,
}

impl Mansion {
    /// Build the mansion layout
    pub fn build() -> Self {
        let library = Room::new("Biblioteca")
            .clue_text("Um livro aberto com paginas rasgadas")
            .left(
                Room::new("Escritorio")
                    .clue_text("Cinzas de cigarro no cinzeiro")
                    .left(Room::new("Sotao").clue_text("Um cigarro apagado no chao")),
            )
            .right(
                Room::new("Sala de Estar")
                    .clue_text("Um lenco perfumado esquecido no sofa")
                    .right(Room::new("Quarto").clue_text("Frasco de perfume caro sobre a comoda")),
            );

        let kitchen = Room::new("Cozinha")
            .clue_text("Uma faca com manchas de sangue")
            .left(Room::new("Despensa"))
            .right(Room::new("Jardim").clue_text("Marcas de lama e botas sujas"));

        Self::from_root(Room::new("Hall de Entrada").left(library).right(kitchen))
    }

    pub fn from_root(root: Room) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Room {
        &self.root
    }

    /// Walk every room, parents before children
    pub fn rooms(&self) -> Rooms<'_> {
        Rooms {
            stack: vec![&self.root],
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms().count()
    }

    pub fn find(&self, name: &str) -> Option<&Room> {
        self.rooms().find(|room| room.name == name)
    }
}

/// Pre-order walk over the map
pub struct Rooms<'a> {
    stack: Vec<&'a Room>,
}

impl<'a> Iterator for Rooms<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let room = self.stack.pop()?;
        if let Some(right) = room.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = room.left.as_deref() {
            self.stack.push(left);
        }
        Some(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_floor_plan() {
        let mansion = Mansion::build();
        let hall = mansion.root();
        assert_eq!(hall.name, "Hall de Entrada");
        assert_eq!(hall.clue(), None);

        let library = hall.child(Direction::Left).unwrap();
        let kitchen = hall.child(Direction::Right).unwrap();
        assert_eq!(library.name, "Biblioteca");
        assert_eq!(kitchen.name, "Cozinha");

        let office = library.child(Direction::Left).unwrap();
        assert_eq!(office.clue(), Some("Cinzas de cigarro no cinzeiro"));
        let attic = office.child(Direction::Left).unwrap();
        assert_eq!(attic.name, "Sotao");
        assert!(office.child(Direction::Right).is_none());

        let living = library.child(Direction::Right).unwrap();
        assert_eq!(living.name, "Sala de Estar");
        assert!(living.child(Direction::Left).is_none());
        assert_eq!(living.child(Direction::Right).unwrap().name, "Quarto");

        assert_eq!(kitchen.child(Direction::Left).unwrap().clue(), None);
        assert_eq!(
            kitchen.child(Direction::Right).unwrap().clue(),
            Some("Marcas de lama e botas sujas")
        );
    }

    #[test]
    fn test_rooms_walk_in_preorder() {
        let names: Vec<_> = Mansion::build().rooms().map(|r| r.name.clone()).collect();
        assert_eq!(
            names,
            [
                "Hall de Entrada",
                "Biblioteca",
                "Escritorio",
                "Sotao",
                "Sala de Estar",
                "Quarto",
                "Cozinha",
                "Despensa",
                "Jardim",
            ]
        );
    }

    #[test]
    fn test_count_and_find() {
        let mansion = Mansion::build();
        assert_eq!(mansion.room_count(), 9);
        assert_eq!(
            mansion.find("Cozinha").and_then(Room::clue),
            Some("Uma faca com manchas de sangue")
        );
        assert!(mansion.find("Porao").is_none());
    }

    #[test]
    fn test_exits_and_empty_clue() {
        let room = Room::new("Vazio").clue_text("").right(Room::new("Fundo"));
        assert_eq!(room.clue(), None);
        assert_eq!(room.exits(), vec![Direction::Right]);
        assert!(Room::new("Folha").exits().is_empty());
    }
}
