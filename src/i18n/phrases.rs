//! Static phrase tables for common English task phrases.
//!
//! Keys are lowercase English. Every table lists the same keys in the same
//! order; the order is the tie-break for partial matches, so new phrases go at
//! the end.

/// Ordered `(english, translation)` pairs.
pub type PhraseTable = &'static [(&'static str, &'static str)];

pub const SPANISH: PhraseTable = &[
    ("buy groceries", "comprar comestibles"),
    ("walk the dog", "pasear al perro"),
    ("clean the house", "limpiar la casa"),
    ("do laundry", "lavar la ropa"),
    ("pay bills", "pagar las facturas"),
    ("call mom", "llamar a mamá"),
    ("go to the gym", "ir al gimnasio"),
    ("cook dinner", "cocinar la cena"),
    ("wash the car", "lavar el coche"),
    ("finish homework", "terminar la tarea"),
    ("read a book", "leer un libro"),
    ("water the plants", "regar las plantas"),
    ("take out the trash", "sacar la basura"),
    ("send email", "enviar correo electrónico"),
    ("go shopping", "ir de compras"),
];

pub const FRENCH: PhraseTable = &[
    ("buy groceries", "faire les courses"),
    ("walk the dog", "promener le chien"),
    ("clean the house", "nettoyer la maison"),
    ("do laundry", "faire la lessive"),
    ("pay bills", "payer les factures"),
    ("call mom", "appeler maman"),
    ("go to the gym", "aller à la salle de sport"),
    ("cook dinner", "préparer le dîner"),
    ("wash the car", "laver la voiture"),
    ("finish homework", "finir les devoirs"),
    ("read a book", "lire un livre"),
    ("water the plants", "arroser les plantes"),
    ("take out the trash", "sortir les poubelles"),
    ("send email", "envoyer un e-mail"),
    ("go shopping", "faire du shopping"),
];

pub const GERMAN: PhraseTable = &[
    ("buy groceries", "Lebensmittel einkaufen"),
    ("walk the dog", "mit dem Hund Gassi gehen"),
    ("clean the house", "das Haus putzen"),
    ("do laundry", "Wäsche waschen"),
    ("pay bills", "Rechnungen bezahlen"),
    ("call mom", "Mama anrufen"),
    ("go to the gym", "ins Fitnessstudio gehen"),
    ("cook dinner", "Abendessen kochen"),
    ("wash the car", "das Auto waschen"),
    ("finish homework", "Hausaufgaben erledigen"),
    ("read a book", "ein Buch lesen"),
    ("water the plants", "die Pflanzen gießen"),
    ("take out the trash", "den Müll rausbringen"),
    ("send email", "E-Mail senden"),
    ("go shopping", "einkaufen gehen"),
];

pub const ITALIAN: PhraseTable = &[
    ("buy groceries", "fare la spesa"),
    ("walk the dog", "portare a spasso il cane"),
    ("clean the house", "pulire la casa"),
    ("do laundry", "fare il bucato"),
    ("pay bills", "pagare le bollette"),
    ("call mom", "chiamare la mamma"),
    ("go to the gym", "andare in palestra"),
    ("cook dinner", "cucinare la cena"),
    ("wash the car", "lavare la macchina"),
    ("finish homework", "finire i compiti"),
    ("read a book", "leggere un libro"),
    ("water the plants", "annaffiare le piante"),
    ("take out the trash", "portare fuori la spazzatura"),
    ("send email", "inviare un'email"),
    ("go shopping", "andare a fare shopping"),
];

pub const PORTUGUESE: PhraseTable = &[
    ("buy groceries", "comprar mantimentos"),
    ("walk the dog", "passear com o cachorro"),
    ("clean the house", "limpar a casa"),
    ("do laundry", "lavar a roupa"),
    ("pay bills", "pagar as contas"),
    ("call mom", "ligar para a mãe"),
    ("go to the gym", "ir à academia"),
    ("cook dinner", "preparar o jantar"),
    ("wash the car", "lavar o carro"),
    ("finish homework", "terminar o dever de casa"),
    ("read a book", "ler um livro"),
    ("water the plants", "regar as plantas"),
    ("take out the trash", "levar o lixo para fora"),
    ("send email", "enviar e-mail"),
    ("go shopping", "ir às compras"),
];

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PhraseTable; 5] = [SPANISH, FRENCH, GERMAN, ITALIAN, PORTUGUESE];

    #[test]
    fn test_tables_share_keys_in_same_order() {
        let keys: Vec<_> = SPANISH.iter().map(|(key, _)| *key).collect();
        for table in ALL {
            let other: Vec<_> = table.iter().map(|(key, _)| *key).collect();
            assert_eq!(keys, other);
        }
    }

    #[test]
    fn test_tables_have_fifteen_entries() {
        for table in ALL {
            assert_eq!(table.len(), 15);
        }
    }

    #[test]
    fn test_keys_are_normalized() {
        for table in ALL {
            for (key, translation) in table.iter() {
                assert_eq!(*key, key.trim().to_lowercase(), "key {key:?}");
                assert!(!translation.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_buy_groceries_comes_first() {
        assert_eq!(SPANISH[0], ("buy groceries", "comprar comestibles"));
    }
}
