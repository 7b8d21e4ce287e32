/// System prompt for structuring free-text ingredient lists.
pub const PARSE_RECIPES_PROMPT: &str = "\
You receive a JSON array of recipes. Each recipe has an id, name, numDays, servings, \
adjustedServings, formatted flag and a free-text `ingredients` field.
Return every recipe unchanged except for its ingredients, which you must convert into \
`ingredientSections`:
- Keep the original order of ingredients.
- When the text groups ingredients under a heading (for example 'Marinade' or 'For the \
sauce'), create a section with that heading as its name. Ingredients before the first \
heading go into a section whose name is null.
- For each ingredient give its name in singular lower case, its measurement as a numeric \
value plus a short unit, and any preparation detail as a note. The unit is never empty: \
use 'whole' for countable items such as '2 eggs' or '1 lemon'.
- Use null for the measurement when no quantity is given, for example 'salt to taste'.
- Convert fractions and ranges to a single decimal number, using the upper bound of a range.
- If the ingredients field is empty or cannot be understood, set ingredientSections to null.";

/// System prompt for grouping the aggregated list by store aisle.
pub const ORGANIZE_GROCERY_LIST_PROMPT: &str = "\
Group the grocery list by category, using an emoji to label each category (e.g., '🥩 Meat').
When applicable, use the following categories: 'Produce' (for fruits, vegetables, and \
mushrooms), 'Dairy & Eggs', 'Meat' (including poultry and seafood), 'Baked Goods', \
'Grains & Cereals', 'Canned Goods', and 'Pantry' (for condiments, spices, etc.).
Add other categories if necessary.
Keep the format and content of individual items unchanged.
Do not add any bullets or hyphens beside each item.";
