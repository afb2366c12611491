/*!

This is the long-form manual for `eloquent_core` and the `eloquent` command.

## How the ranking works

Every idea starts with a rating of 1000. Ideas are shown two at a time and you
state which one you prefer, or that you have no preference. After each answer,
both ratings move using the Elo formula:

- the *expectation* of an idea is `1 / (1 + 10^((other - rating) / 400))`;
- its *score* is 1 if it was preferred, 0 if the other one was, 0.5 otherwise;
- its rating changes by `32 * (score - expectation)`.

An unexpected answer (preferring the lower rated idea) moves the ratings more
than an expected one. A single comparison never moves a rating by more than 32.

## Input formats

### `text`

One idea per line. Empty lines and lines starting with `#` are ignored. A cost
may follow the name, separated by a semicolon:

```text
# weekend projects
Fix the bike ; 40
Repaint the kitchen ; 250
Start a vegetable garden
```

Only a number after the last semicolon is read as a cost, so `Fish; chips` is
the name of a single idea, and `Fish; chips; 12` costs 12.

### `json`

An array of objects with a `name` and an optional `cost`:

```json
[
  { "name": "Fix the bike", "cost": 40 },
  { "name": "Start a vegetable garden" }
]
```

## Sessions

With `--state`, the ideas and their ratings are read from the given file if it
exists, and written back at the end. Ideas from `--input` whose name is already
in the session are skipped, so the same list can be passed every time. The
answers given so far are saved even if reading the answers fails midway.

```bash
eloquent -i projects.txt -s projects.json --rounds 10
```

At each prompt, answer `1` or `2` to pick an idea, `=` for no preference or `q` to
stop.

## Output

Without `--out`, the ranking is printed as a table. With `--out`, a JSON
summary is written to the given file (or to the standard output with
`--out stdout`):

```json
{
  "totalComparisons": 1,
  "ranking": [
    { "rank": 1, "id": 0, "name": "Fix the bike", "elo": 1016.0, "comparisons": 1, "cost": 40.0 },
    { "rank": 2, "id": 2, "name": "Start a vegetable garden", "elo": 1000.0, "comparisons": 0 },
    { "rank": 3, "id": 1, "name": "Repaint the kitchen", "elo": 984.0, "comparisons": 1, "cost": 250.0 }
  ]
}
```

*/
