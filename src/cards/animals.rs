//! The standard animal pool.
//!
//! Fifty animals, enough for the largest custom grid (10x10 = 50 pairs).
//! The first entries are the most familiar, since small levels only ever
//! deal from the front.

use super::registry::CardPool;

const ANIMALS: &[(&str, &str, &str)] = &[
    ("Lion", "The lion is the king of animals, known for its powerful roar and majestic mane", "🦁"),
    ("Elephant", "Elephants are gentle giants with excellent memory and strong family bonds", "🐘"),
    ("Tiger", "Tigers are powerful striped cats, excellent hunters with incredible strength", "🐅"),
    ("Bear", "Bears are strong, intelligent mammals that can stand on their hind legs", "🐻"),
    ("Eagle", "Eagles are magnificent birds of prey with excellent eyesight and powerful wings", "🦅"),
    ("Dolphin", "Dolphins are intelligent marine mammals known for their playful nature", "🐬"),
    ("Butterfly", "Butterflies are beautiful insects that transform from caterpillars", "🦋"),
    ("Owl", "Owls are wise nocturnal birds with excellent hearing and silent flight", "🦉"),
    ("Penguin", "Penguins are flightless birds that excel at swimming and sliding on ice", "🐧"),
    ("Giraffe", "Giraffes are the tallest land animals with long necks to reach high leaves", "🦒"),
    ("Kangaroo", "Kangaroos are marsupials that hop and carry their babies in pouches", "🦘"),
    ("Octopus", "Octopuses are intelligent sea creatures with eight arms and can change color", "🐙"),
    ("Peacock", "Peacocks are colorful birds known for their magnificent tail displays", "🦚"),
    ("Koala", "Koalas are tree-dwelling marsupials that mainly eat eucalyptus leaves", "🐨"),
    ("Zebra", "Zebras have distinctive black and white stripes, unique to each individual", "🦓"),
    ("Panda", "Pandas are black and white bears that primarily eat bamboo", "🐼"),
    ("Rhinoceros", "Rhinoceros are powerful animals with distinctive horns on their nose", "🦏"),
    ("Gorilla", "Gorillas are intelligent primates that live in family groups called troops", "🦍"),
    ("Flamingo", "Flamingos are pink birds that often stand on one leg", "🦩"),
    ("Hedgehog", "Hedgehogs are small mammals covered in spikes for protection", "🦔"),
    ("Turtle", "Turtles are reptiles with hard shells that can live for many decades", "🐢"),
    ("Parrot", "Parrots are colorful birds known for their ability to mimic sounds", "🦜"),
    ("Shark", "Sharks are powerful ocean predators with multiple rows of teeth", "🦈"),
    ("Unicorn", "Unicorns are magical horses with a single horn on their forehead", "🦄"),
    ("Wolf", "Wolves are social animals that live and hunt in packs", "🐺"),
    ("Fox", "Foxes are clever animals with bushy tails and very sharp hearing", "🦊"),
    ("Rabbit", "Rabbits have long ears and strong back legs for hopping", "🐰"),
    ("Frog", "Frogs start life as tadpoles and can jump many times their length", "🐸"),
    ("Monkey", "Monkeys are playful primates that swing through the trees", "🐒"),
    ("Horse", "Horses are strong, fast animals that have worked alongside people for ages", "🐎"),
    ("Cow", "Cows are gentle farm animals that give us milk", "🐄"),
    ("Pig", "Pigs are smart farm animals that love to roll in mud to stay cool", "🐖"),
    ("Sheep", "Sheep grow soft wool that people use to make warm clothes", "🐑"),
    ("Chicken", "Chickens are farm birds that lay eggs and cluck", "🐔"),
    ("Duck", "Ducks are water birds with webbed feet that quack", "🦆"),
    ("Swan", "Swans are graceful white birds with long curved necks", "🦢"),
    ("Whale", "Whales are the largest animals on Earth and sing songs under the sea", "🐋"),
    ("Crab", "Crabs walk sideways and have two strong claws", "🦀"),
    ("Snail", "Snails move slowly and carry their spiral shell home on their backs", "🐌"),
    ("Bee", "Bees buzz from flower to flower and make sweet honey", "🐝"),
    ("Ladybug", "Ladybugs are small red beetles with black spots", "🐞"),
    ("Camel", "Camels live in deserts and store fat in their humps", "🐫"),
    ("Hippopotamus", "Hippos spend most of the day in rivers to keep their skin cool", "🦛"),
    ("Squirrel", "Squirrels have fluffy tails and bury nuts to eat in winter", "🐿️"),
    ("Bat", "Bats are flying mammals that find their way by listening to echoes", "🦇"),
    ("Crocodile", "Crocodiles are large reptiles with strong jaws that rest in rivers", "🐊"),
    ("Snake", "Snakes have no legs and slither along the ground", "🐍"),
    ("Sloth", "Sloths move very slowly and hang upside down in trees", "🦥"),
    ("Otter", "Otters are playful swimmers that hold hands while they sleep", "🦦"),
    ("Deer", "Deer are gentle forest animals, and the males grow antlers", "🦌"),
];

impl CardPool {
    /// The standard animal pool in dealing order.
    #[must_use]
    pub fn standard() -> Self {
        let mut pool = CardPool::new();
        for &(label, description, icon) in ANIMALS {
            pool.register_auto(label, description, icon);
        }
        pool
    }
}
